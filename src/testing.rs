//! Shared helpers for unit tests: random edge sets, reference oracles and the
//! `test_graph_ops!` macro run against every representation.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use itertools::Itertools;
use rand::Rng;

use crate::{ops::*, *};

/// Creates a sorted list of at most `m_ub` distinct, normalized, loop-free random edges
/// for nodes `0..n`
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    let mut edges = (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
        .filter(|e| !e.is_loop())
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Hop distances from `start` computed on a plain edge list; `None` if unreachable
pub(crate) fn distances_from(n: NumNodes, edges: &[Edge], start: Node) -> Vec<Option<Level>> {
    let mut adj = vec![Vec::new(); n as usize];
    for &Edge(u, v) in edges {
        adj[u as usize].push(v);
        adj[v as usize].push(u);
    }

    let mut dist = vec![None; n as usize];
    dist[start as usize] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        let d = dist[u as usize].map_or(0, |d: Level| d + 1);
        for &v in &adj[u as usize] {
            if dist[v as usize].is_none() {
                dist[v as usize] = Some(d);
                queue.push_back(v);
            }
        }
    }
    dist
}

/// Vertices reachable from `start`
pub(crate) fn component_of(n: NumNodes, edges: &[Edge], start: Node) -> FixedBitSet {
    let mut reached = FixedBitSet::with_capacity(n as usize);
    for (u, d) in distances_from(n, edges, start).into_iter().enumerate() {
        reached.set(u, d.is_some());
    }
    reached
}

/// Asserts that `tree` is acyclic and that its edges connect exactly the vertices
/// in `spanned`
pub(crate) fn assert_is_tree<G: AdjacencyList + GraphEdgeOrder>(tree: &G, spanned: &FixedBitSet) {
    let n = tree.len();
    let mut parent = (0..n).collect_vec();

    fn find(parent: &mut [usize], mut u: usize) -> usize {
        while parent[u] != u {
            parent[u] = parent[parent[u]];
            u = parent[u];
        }
        u
    }

    let edges = tree.edges(true).collect_vec();
    assert_eq!(edges.len(), tree.number_of_edges() as usize);

    for Edge(u, v) in edges {
        assert!(spanned.contains(u as usize) && spanned.contains(v as usize));
        let (ru, rv) = (find(&mut parent, u as usize), find(&mut parent, v as usize));
        assert_ne!(ru, rv, "cycle through edge ({u},{v})");
        parent[ru] = rv;
    }

    assert_eq!(
        tree.number_of_edges() as usize + 1,
        spanned.count_ones(..).max(1)
    );
}

/// Checks the basic graph operations of a representation against a bitset reference
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        mod $env {
            use fixedbitset::FixedBitSet;
            use itertools::Itertools;
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            use crate::{ops::*, repr::*, testing::random_edges, Edge, NumEdges, NumNodes};

            #[test]
            fn graph_new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);

                    assert_eq!(graph.vertices_range().len(), n as usize);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.degrees().all(|d| d == 0));
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, m_ub as NumEdges);

                            let mut reference =
                                vec![FixedBitSet::with_capacity(n as usize); n as usize];
                            for &Edge(u, v) in &edges {
                                reference[u as usize].insert(v as usize);
                                reference[v as usize].insert(u as usize);
                            }

                            let graph = <$graph>::from_edges(n, edges.iter());

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                            assert_eq!(graph.sum_of_degrees(), 2 * edges.len() as u64);
                            assert_eq!(graph.ordered_edges(true), edges);

                            for u in 0..n {
                                let mut nbs = FixedBitSet::with_capacity(n as usize);
                                nbs.extend(graph.neighbors_of(u).map(|v| v as usize));

                                assert_eq!(nbs, reference[u as usize]);
                                assert_eq!(
                                    graph.degree_of(u) as usize,
                                    reference[u as usize].count_ones(..)
                                );
                                assert!(
                                    graph.neighbors_of(u).all(|v| graph.has_edge(u, v))
                                );
                            }
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
