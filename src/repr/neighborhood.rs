use fixedbitset::FixedBitSet;
use itertools::Either;

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    /// Creates an empty Neighborhood for a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of adjacency entries in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in the natural order of the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over all neighbors, honouring `order` if the Neighborhood has
    /// an inherent vertex order
    fn neighbors_scan(&self, order: ScanOrder) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// For some implementations, this might lead to Multi-Edges
    /// ** Might panic if `u >= n` **
    fn add_neighbor(&mut self, u: Node);
}

/// A row of an adjacency matrix.
///
/// Adding a neighbor twice is idempotent. Iteration follows vertex ids.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitNeighborhood(pub FixedBitSet);

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(FixedBitSet::with_capacity(n as usize))
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.count_ones(..) as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.ones().map(|v| v as Node)
    }

    fn neighbors_scan(&self, order: ScanOrder) -> impl Iterator<Item = Node> + '_ {
        match order {
            ScanOrder::Ascending => Either::Left(self.neighbors()),
            ScanOrder::Descending => Either::Right(
                (0..self.0.len())
                    .rev()
                    .filter(move |&v| self.0.contains(v))
                    .map(|v| v as Node),
            ),
        }
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains(v as usize)
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.insert(u as usize);
    }
}

/// An adjacency list owned by a single vertex.
///
/// Entries are enumerated most-recent-first: the neighbor added last is yielded first.
/// Duplicates are kept, so inserting an edge twice yields the neighbor twice.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListNeighborhood(pub Vec<Node>);

impl Neighborhood for ListNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        // stored in insertion order, so walking backwards emulates head-insertion
        self.0.iter().rev().copied()
    }

    fn neighbors_scan(&self, _order: ScanOrder) -> impl Iterator<Item = Node> + '_ {
        self.neighbors()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bit_neighborhood_scan_order() {
        let mut nbs = BitNeighborhood::new(8);
        for u in [5, 1, 7, 1, 3] {
            nbs.add_neighbor(u);
        }

        assert_eq!(nbs.num_of_neighbors(), 4);
        assert_eq!(nbs.neighbors().collect_vec(), vec![1, 3, 5, 7]);
        assert_eq!(
            nbs.neighbors_scan(ScanOrder::Ascending).collect_vec(),
            vec![1, 3, 5, 7]
        );
        assert_eq!(
            nbs.neighbors_scan(ScanOrder::Descending).collect_vec(),
            vec![7, 5, 3, 1]
        );
        assert!(nbs.has_neighbor(5));
        assert!(!nbs.has_neighbor(4));
    }

    #[test]
    fn list_neighborhood_is_most_recent_first() {
        let mut nbs = ListNeighborhood::new(8);
        for u in [5, 1, 7, 1, 3] {
            nbs.add_neighbor(u);
        }

        assert_eq!(nbs.num_of_neighbors(), 5);
        assert_eq!(nbs.neighbors().collect_vec(), vec![3, 1, 7, 1, 5]);
        assert_eq!(
            nbs.neighbors_scan(ScanOrder::Descending).collect_vec(),
            nbs.neighbors_scan(ScanOrder::Ascending).collect_vec()
        );
        assert!(nbs.has_neighbor(7));
        assert!(!nbs.has_neighbor(0));
    }
}
