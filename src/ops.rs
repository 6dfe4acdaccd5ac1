use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Direction in which a representation with an inherent vertex order (the adjacency matrix)
/// is scanned when enumerating neighbors.
///
/// Representations without such an order (the adjacency list) ignore the request and yield
/// their natural order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ScanOrder {
    /// Smallest vertex id first
    #[default]
    Ascending,
    /// Largest vertex id first
    Descending,
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over V that does not borrow the graph
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if `u` is a valid vertex id of this graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edge insertions performed on the graph.
    ///
    /// Every insertion counts once, even if the representation stored it idempotently.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighborhood of a given vertex in the natural order of
    /// the representation (ascending ids for a matrix, most-recent-first for a list).
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over the neighborhood of a given vertex, scanning an ordered
    /// representation in the requested direction.
    /// ** Panics if `u >= n` **
    fn neighbors_scan(&self, u: Node, order: ScanOrder) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the sum of all degrees, i.e. the number of stored adjacency entries
    fn sum_of_degrees(&self) -> u64 {
        self.degrees().map(|d| d as u64).sum()
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the minimum degree in the graph
    fn min_degree(&self) -> NumNodes {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns a distribution sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        self.degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .sorted_by_key(|(d, _)| *d)
            .collect_vec()
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect_vec()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Trait for creating an empty graph with the same vertex count and representation as an
/// existing one (used to build traversal trees next to the traversed graph)
pub trait GraphEmptyLike {
    /// Creates an edgeless graph shaped like `self`
    fn empty_like(&self) -> Self;
}

impl<G: GraphNew + GraphNodeOrder> GraphEmptyLike for G {
    fn empty_like(&self) -> Self {
        G::new(self.number_of_nodes())
    }
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the undirected edge *{u,v}* and increments the edge count by one.
    /// Duplicates and self-loops are not normalized; how they are stored depends on the
    /// representation.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Like [`GraphEdgeEditing::add_edge`] but reports out-of-range endpoints as an error
    /// instead of panicking. The graph is left untouched on error.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        for vertex in [u, v] {
            if !self.contains_node(vertex) {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    n: self.number_of_nodes(),
                });
            }
        }
        self.add_edge(u, v);
        Ok(())
    }

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
