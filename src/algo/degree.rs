use std::fmt::Display;

use super::*;

/// Summary statistics over the degree sequence of a graph.
///
/// The degree of a vertex is its number of adjacency entries, so it follows the storage
/// rules of the representation: a duplicate edge counts twice on a list and once on a
/// matrix, and a self-loop contributes two entries on a list and one on a matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DegreeStats {
    pub number_of_nodes: NumNodes,
    pub min_degree: NumNodes,
    pub max_degree: NumNodes,
    pub mean_degree: f64,
    /// Middle value of the sorted degrees; for an even count the floored mean of the two
    /// middle values
    pub median_degree: NumNodes,
    /// Half the sum of all degrees
    pub total_edges: u64,
}

impl DegreeStats {
    /// Computes the statistics of an arbitrary degree sequence.
    /// Returns `None` if the sequence is empty.
    pub fn from_degrees(degrees: impl IntoIterator<Item = NumNodes>) -> Option<Self> {
        let mut degrees: Vec<NumNodes> = degrees.into_iter().collect();
        if degrees.is_empty() {
            return None;
        }

        degrees.sort_unstable();

        let n = degrees.len();
        let sum: u64 = degrees.iter().map(|&d| d as u64).sum();
        let median_degree = if n % 2 == 0 {
            ((degrees[n / 2 - 1] as u64 + degrees[n / 2] as u64) / 2) as NumNodes
        } else {
            degrees[n / 2]
        };

        Some(Self {
            number_of_nodes: n as NumNodes,
            min_degree: degrees[0],
            max_degree: degrees[n - 1],
            mean_degree: sum as f64 / n as f64,
            median_degree,
            total_edges: sum / 2,
        })
    }
}

impl Display for DegreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vertices:      {}", self.number_of_nodes)?;
        writeln!(f, "Min degree:    {}", self.min_degree)?;
        writeln!(f, "Max degree:    {}", self.max_degree)?;
        writeln!(f, "Mean degree:   {:.2}", self.mean_degree)?;
        writeln!(f, "Median degree: {}", self.median_degree)?;
        write!(f, "Total edges:   {}", self.total_edges)
    }
}

/// Provides degree statistics directly on every graph
pub trait DegreeStatistics: AdjacencyList {
    /// Computes the [`DegreeStats`] of the graph; `None` if the graph has no vertices
    fn degree_stats(&self) -> Option<DegreeStats> {
        DegreeStats::from_degrees(self.degrees())
    }
}

impl<G: AdjacencyList> DegreeStatistics for G {}
