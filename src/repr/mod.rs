/*!
# Representations

Two interchangeable storage backends for undirected graphs:

- [`AdjMatrixUndir`]: one bit row per vertex (a square, symmetric boolean matrix).
  Neighbors are enumerated by vertex id, ascending or descending on request.
  Re-inserting an edge is idempotent.
- [`AdjListUndir`]: one owned neighbor sequence per vertex, enumerated most-recent-first.
  Re-inserting an edge creates duplicate entries.

Both are instances of [`UndirectedGraph`] parameterized by a [`Neighborhood`], so all
algorithms in this crate are written once against the traits in [`crate::ops`].
When the representation is only known at runtime, use [`GraphStore`] which selects
one of the two at construction.
*/

use std::{fmt::Display, str::FromStr};

use crate::{ops::*, *};

mod neighborhood;
mod store;
mod undirected;

pub use neighborhood::*;
pub use store::*;
pub use undirected::*;

/// Which backing structure stores the adjacency of a graph
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RepresentationKind {
    /// Adjacency matrix
    #[default]
    Matrix,
    /// Adjacency list
    List,
}

impl FromStr for RepresentationKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "matrix" | "adjmatrix" | "m" => Ok(RepresentationKind::Matrix),
            "list" | "adjlist" | "l" => Ok(RepresentationKind::List),
            _ => Err(GraphError::UnknownRepresentation(s.to_string())),
        }
    }
}

impl Display for RepresentationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepresentationKind::Matrix => write!(f, "matrix"),
            RepresentationKind::List => write!(f, "list"),
        }
    }
}
