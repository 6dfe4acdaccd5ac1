/*!
# Utilities

Helper data structures used by the algorithms, currently the fixed-capacity frontiers
[`BoundedStack`] and [`BoundedQueue`] that drive the traversals.
*/

pub mod bounded;

pub use bounded::*;
