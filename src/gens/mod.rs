/*!
# Random and structured inputs

Edge sources used to build traversal inputs: a seeded `G(n, p)` stream ([`Gnp`]) and
helpers that wire fixed shapes ([`GeneratorSubstructures`]) into an existing graph.
Dense shapes such as cliques are the interesting case for the depth-first frontier, which
holds one entry per followed adjacency rather than one per vertex.

```rust
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use spangraph::{algo::*, gens::*, prelude::*};

let rng = &mut Pcg64Mcg::seed_from_u64(5);
let g = AdjListUndir::gnp_no_loops(rng, 50, 0.1);
let run = g.bfs_tree(0).unwrap();
assert!(run.stats.visited >= 1);
```
*/

use rand::Rng;

use crate::{ops::*, *};

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Generators over a vertex set `0..n`
pub trait NumNodesGen {
    fn nodes(self, n: NumNodes) -> Self;
}

/// Generators whose density can be given as the expected degree of a vertex
pub trait AverageDegreeGen {
    fn avg_deg(self, deg: f64) -> Self;
}

/// A configured edge source. Every call draws fresh randomness from `rng`.
pub trait GraphGenerator {
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Edges in generation order; nothing is drawn before the iterator is polled
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Constructors that build a graph straight from a random model
pub trait RandomGraph: Sized {
    /// `G(n, p)` including self-loops, each drawn with probability `p`
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// `G(n, p)` restricted to pairs of distinct vertices
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).stream(rng))
    }

    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .stream(rng)
                .filter(|e| !e.is_loop()),
        )
    }
}
