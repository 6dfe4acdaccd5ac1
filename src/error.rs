//! Error type shared by the graph containers and the traversal engine.

use thiserror::Error;

use crate::{Node, NumNodes};

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors reported by graph construction, the bounded frontiers and the traversal engine.
///
/// Overflow/underflow of the frontiers are reported as values rather than panics; callers
/// decide whether they are fatal.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex id is not in `0..n`.
    #[error("vertex {vertex} is out of range for a graph with {n} vertices")]
    VertexOutOfRange { vertex: Node, n: NumNodes },

    /// Caller-supplied label arrays do not match the number of vertices.
    #[error("label arrays hold {actual} entries but the graph has {expected} vertices")]
    LabelSizeMismatch { expected: usize, actual: usize },

    /// Push onto a full stack.
    #[error("stack overflow: capacity {capacity} exhausted")]
    StackOverflow { capacity: usize },

    /// Pop from an empty stack.
    #[error("stack underflow: pop on empty stack")]
    StackUnderflow,

    /// Enqueue into a full queue.
    #[error("queue full: capacity {capacity} exhausted")]
    QueueFull { capacity: usize },

    /// Dequeue from an empty queue.
    #[error("queue empty: dequeue on empty queue")]
    QueueEmpty,

    /// Unknown representation name.
    #[error("unknown representation `{0}` (expected `matrix` or `list`)")]
    UnknownRepresentation(String),

    /// Unknown traversal name.
    #[error("unknown traversal `{0}` (expected `dfs` or `bfs`)")]
    UnknownTraversal(String),

    /// Underlying IO failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Returns *true* if the error stems from a bounded frontier running full
    pub fn is_capacity_exhausted(&self) -> bool {
        matches!(
            self,
            GraphError::StackOverflow { .. } | GraphError::QueueFull { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = GraphError::VertexOutOfRange { vertex: 7, n: 4 };
        assert_eq!(
            err.to_string(),
            "vertex 7 is out of range for a graph with 4 vertices"
        );
        assert!(GraphError::QueueFull { capacity: 3 }.is_capacity_exhausted());
        assert!(GraphError::StackOverflow { capacity: 3 }.is_capacity_exhausted());
        assert!(!GraphError::StackUnderflow.is_capacity_exhausted());

        let io: GraphError = std::io::Error::other("disk").into();
        assert_eq!(io.to_string(), "disk");
    }
}
