use super::*;

/// An undirected graph representation
#[derive(Debug, Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Matrix
pub type AdjMatrixUndir = UndirectedGraph<BitNeighborhood>;

/// Representation using an Adjacency-List
pub type AdjListUndir = UndirectedGraph<ListNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn neighbors_scan(&self, u: Node, order: ScanOrder) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors_scan(order)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            num_edges: 0,
            nbs: vec![Nbs::new(n); n as usize],
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        assert!(u < n && v < n, "edge ({u},{v}) out of range for {n} nodes");

        // a self-loop lands twice in the same neighborhood; only lists keep both entries
        self.nbs[u as usize].add_neighbor(v);
        self.nbs[v as usize].add_neighbor(u);
        self.num_edges += 1;
    }
}
