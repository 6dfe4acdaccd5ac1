/*!
`spangraph` stores small, unweighted, undirected graphs either as an **adjacency matrix** or
as **adjacency lists** and runs tree-building depth-first and breadth-first traversals on
them.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the
graph. Input and output formats number vertices from `1`; the conversion happens at the
boundary (see [`node_from_one_based`] and [`node_to_one_based`]).
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

### Available Representations

See the [`repr`] module:

- [`AdjMatrixUndir`](crate::repr::AdjMatrixUndir): one bitset row per vertex; duplicate
  edges collapse, neighbors can be scanned in either id order.
- [`AdjListUndir`](crate::repr::AdjListUndir): one owned sequence per vertex; duplicates are
  kept and neighbors are enumerated most-recent-first.
- [`GraphStore`](crate::repr::GraphStore): either of the above, chosen at runtime.

All of them implement the capability traits in [`ops`], which is the only thing the
algorithms depend on.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all
  representations,
- [`algo`] includes the traversals (`graph.dfs_tree(start)`, `graph.bfs_tree(start)`) and
  degree statistics (`graph.degree_stats()`),
- [`io`] reads edge lists and writes edge lists and visit reports,
- [`gens`] includes random `G(n,p)` graphs and deterministic substructures,
- [`utils`] holds the bounded stack and queue used as traversal frontiers.

```rust
use spangraph::{prelude::*, algo::*};

let g = GraphStore::from_edges(4, RepresentationKind::List, [(0, 1), (1, 2), (2, 3), (3, 0)]);
let run = g.bfs_tree(0).unwrap();

assert_eq!(run.labels.levels(), &[0, 1, 2, 1]);
assert_eq!(run.tree.number_of_edges(), 3);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `spangraph::prelude` includes definitions for nodes, edges and errors, all basic graph
/// operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
