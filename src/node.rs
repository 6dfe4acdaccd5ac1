/*!
# Node Representation

Vertices are numbered `0` to `n - 1` and stored as `Node = u32`: graphs handled here never
come close to `2^32` vertices, and a 32-bit id halves the footprint of the adjacency lists
and of every per-vertex label array a traversal allocates.

Edge-list files and visit reports are **1-based**; the conversion happens exactly once, at
the IO boundary (see [`crate::io`]).
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid (e.g. the parent of a vertex that was never reached)
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Distance-from-start label recorded by a traversal
pub type Level = u32;

/// Converts a 1-based vertex id (as found in edge-list files) into a `Node`.
/// Returns `None` if the id is outside of `[1, n]`.
pub fn node_from_one_based(id: i64, n: NumNodes) -> Option<Node> {
    (1..=n as i64).contains(&id).then(|| (id - 1) as Node)
}

/// Converts a `Node` into its 1-based representation
pub const fn node_to_one_based(u: Node) -> u64 {
    u as u64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_conversion() {
        assert_eq!(node_from_one_based(1, 4), Some(0));
        assert_eq!(node_from_one_based(4, 4), Some(3));
        assert_eq!(node_from_one_based(0, 4), None);
        assert_eq!(node_from_one_based(5, 4), None);
        assert_eq!(node_from_one_based(-3, 4), None);
        assert_eq!(node_from_one_based(1, 0), None);

        assert_eq!(node_to_one_based(0), 1);
        assert_eq!(node_to_one_based(INVALID_NODE - 1), Node::MAX as u64);
    }
}
