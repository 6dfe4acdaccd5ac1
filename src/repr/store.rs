use itertools::Either;

use super::*;

/// A graph whose representation is chosen at runtime.
///
/// All capability traits are forwarded to the selected backend, so algorithms written
/// against [`crate::ops`] run unchanged on either variant. The representation is fixed
/// for the lifetime of the value.
///
/// # Example
/// ```
/// use spangraph::prelude::*;
///
/// let mut g = GraphStore::new(3, RepresentationKind::List);
/// g.add_edge(0, 1);
/// g.add_edge(0, 2);
///
/// assert_eq!(g.kind(), RepresentationKind::List);
/// assert_eq!(g.neighbors_of(0).collect::<Vec<_>>(), vec![2, 1]);
/// ```
#[derive(Debug, Clone)]
pub enum GraphStore {
    /// Backed by an adjacency matrix
    Matrix(AdjMatrixUndir),
    /// Backed by adjacency lists
    List(AdjListUndir),
}

/// Forwards a call to whichever backend is active
macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            GraphStore::Matrix($g) => $body,
            GraphStore::List($g) => $body,
        }
    };
}

/// Like `dispatch!` but for calls returning iterators of different types
macro_rules! dispatch_iter {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            GraphStore::Matrix($g) => Either::Left($body),
            GraphStore::List($g) => Either::Right($body),
        }
    };
}

impl GraphStore {
    /// Creates an edgeless graph with `n` nodes using the requested representation
    pub fn new(n: NumNodes, kind: RepresentationKind) -> Self {
        match kind {
            RepresentationKind::Matrix => GraphStore::Matrix(AdjMatrixUndir::new(n)),
            RepresentationKind::List => GraphStore::List(AdjListUndir::new(n)),
        }
    }

    /// Creates a graph with `n` nodes from a collection of edges
    pub fn from_edges(
        n: NumNodes,
        kind: RepresentationKind,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Self {
        let mut graph = Self::new(n, kind);
        graph.add_edges(edges);
        graph
    }

    /// Returns the representation backing this graph
    pub fn kind(&self) -> RepresentationKind {
        match self {
            GraphStore::Matrix(_) => RepresentationKind::Matrix,
            GraphStore::List(_) => RepresentationKind::List,
        }
    }

    /// Returns the matrix backend if selected
    pub fn as_matrix(&self) -> Option<&AdjMatrixUndir> {
        match self {
            GraphStore::Matrix(g) => Some(g),
            GraphStore::List(_) => None,
        }
    }

    /// Returns the list backend if selected
    pub fn as_list(&self) -> Option<&AdjListUndir> {
        match self {
            GraphStore::List(g) => Some(g),
            GraphStore::Matrix(_) => None,
        }
    }
}

impl From<AdjMatrixUndir> for GraphStore {
    fn from(graph: AdjMatrixUndir) -> Self {
        GraphStore::Matrix(graph)
    }
}

impl From<AdjListUndir> for GraphStore {
    fn from(graph: AdjListUndir) -> Self {
        GraphStore::List(graph)
    }
}

impl GraphNodeOrder for GraphStore {
    fn number_of_nodes(&self) -> NumNodes {
        dispatch!(self, g => g.number_of_nodes())
    }
}

impl GraphEdgeOrder for GraphStore {
    fn number_of_edges(&self) -> NumEdges {
        dispatch!(self, g => g.number_of_edges())
    }
}

impl AdjacencyList for GraphStore {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        dispatch_iter!(self, g => g.neighbors_of(u))
    }

    fn neighbors_scan(&self, u: Node, order: ScanOrder) -> impl Iterator<Item = Node> + '_ {
        dispatch_iter!(self, g => g.neighbors_scan(u, order))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        dispatch!(self, g => g.degree_of(u))
    }
}

impl AdjacencyTest for GraphStore {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        dispatch!(self, g => g.has_edge(u, v))
    }
}

impl GraphEmptyLike for GraphStore {
    fn empty_like(&self) -> Self {
        GraphStore::new(self.number_of_nodes(), self.kind())
    }
}

impl GraphEdgeEditing for GraphStore {
    fn add_edge(&mut self, u: Node, v: Node) {
        dispatch!(self, g => g.add_edge(u, v))
    }
}
