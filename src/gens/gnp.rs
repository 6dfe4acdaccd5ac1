use rand::Rng;

use super::*;

/// Density as configured; an expected degree is turned into `p` only once `n` is final
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    #[default]
    NotSet,
    Prob(f64),
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible undirected edge `{u, v}` (including loops) with
/// probability `p`, independently of each other.
///
/// Edges are produced normalized (`u <= v`), each pair at most once. Dropping loops is up
/// to the caller.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pair probability.
    /// ** Panics if `prob` is not within `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "invalid probability {prob}");
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Gnp needs prob() or avg_deg() before generating"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = d / self.n as f64;
                assert!(
                    (0.0..=1.0).contains(&p),
                    "average degree {d} is not reachable with {} nodes",
                    self.n
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// `p = deg / n`, evaluated when edges are drawn
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let p = self.probability();
        let n = self.n;

        (0..n)
            .flat_map(move |u| (u..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::repr::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert_eq!(Gnp::new().nodes(10).prob(0.0).generate(rng).len(), 0);

        let full = Gnp::new().nodes(10).prob(1.0).generate(rng);
        assert_eq!(full.len(), 55);
        assert!(full.iter().all(|e| e.is_normalized()));
    }

    #[test]
    fn random_graph_without_loops() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        for _ in 0..10 {
            let g = AdjListUndir::gnp_no_loops(rng, 30, 0.2);
            assert_eq!(g.number_of_nodes(), 30);
            assert!(g.vertices().all(|u| !g.has_self_loop(u)));
            assert_eq!(g.sum_of_degrees(), 2 * g.number_of_edges() as u64);
        }
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let g = AdjMatrixUndir::from_edges(
            400,
            Gnp::new().nodes(400).avg_deg(5.0).stream(rng).filter(|e| !e.is_loop()),
        );

        let mean = g.sum_of_degrees() as f64 / 400.0;
        assert!((4.0..6.0).contains(&mean), "mean degree {mean}");
    }
}
