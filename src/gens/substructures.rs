/*!
Fixed shapes wired into an existing graph. Every helper goes through
[`GraphEdgeEditing::add_edge`], so each call counts one insertion per edge and duplicates
behave as the representation dictates.

```rust
use spangraph::{prelude::*, gens::*};

let mut g = AdjMatrixUndir::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.ordered_edges(true),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

pub trait GeneratorSubstructures {
    /// Adds an edge between each consecutive pair
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Like [`GeneratorSubstructures::connect_path`] plus a closing edge from the last
    /// vertex back to the first. One vertex closes onto itself as a self-loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Adds every pair of distinct `nodes`, and a self-loop on each if `with_loops`
    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        self.add_edges(nodes_on_path.into_iter().tuple_windows::<(_, _)>());
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut nodes = nodes_in_cycle.into_iter().peekable();
        let Some(&first) = nodes.peek() else {
            return;
        };

        let mut last = first;
        self.connect_path(nodes.inspect(|&u| last = u));
        self.add_edge(last, first);
    }

    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool) {
        if with_loops {
            self.add_edges(nodes.iter().map(|&u| (u, u)));
        }
        self.add_edges(nodes.iter().copied().tuple_combinations::<(_, _)>());
    }
}
