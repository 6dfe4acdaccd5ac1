/*!
# Graph Algorithms

Algorithms built on top of the capability traits in [`crate::ops`], so they run unchanged
on every representation. Everything is re-exported at the top level of this module:
```rust
use spangraph::algo::*;
```
gives access to the tree-building traversals and the degree statistics.
*/

mod degree;
mod traversal;

use crate::{ops::*, *};

pub use degree::*;
pub use traversal::*;
