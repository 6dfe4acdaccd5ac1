//! # EdgeList
//!
//! The EdgeList-Format consists of a header holding the number of vertices `n`, followed by
//! non-comment-lines `u v` representing an undirected edge `Edge(u - 1, v - 1)`:
//!
//! ```text
//! c a 4-cycle
//! 4
//! 1 2
//! 2 3
//! 3 4
//! 4 1
//! ```
//!
//! Records with an endpoint outside `1..=n` or with tokens after `u v` do not abort reading:
//! they are logged, skipped, and reported in [`EdgeListGraph::rejected`] together with a
//! [`RejectReason`]. Lines without two parsable ids are errors of kind
//! [`ErrorKind::InvalidData`].

use std::{fmt::Display, io::Lines};

use tracing::{debug, warn};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// If set, the input carries no header and this many vertices are assumed
    number_of_nodes: Option<NumNodes>,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            number_of_nodes: None,
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads header-less input with a fixed number of vertices
    pub fn number_of_nodes(mut self, n: NumNodes) -> EdgeListReader {
        self.number_of_nodes = Some(n);
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Reads all records into a graph created by `make` from the number of vertices.
    ///
    /// # Errors
    /// Fails on I/O errors, a missing or malformed header, or a malformed record.
    pub fn try_read_with<G, R, F>(&self, reader: R, make: F) -> Result<EdgeListGraph<G>>
    where
        G: GraphEdgeEditing + GraphEdgeOrder,
        R: BufRead,
        F: FnOnce(NumNodes) -> G,
    {
        let mut records = EdgeListRecords::new(reader, &self.comment_identifier);

        let n = match self.number_of_nodes {
            Some(n) => n,
            None => records.parse_header()?,
        };

        let mut graph = make(n);
        let mut rejected = Vec::new();

        for record in records {
            let EdgeRecord {
                line,
                u,
                v,
                trailing,
            } = record?;

            let reason = match (node_from_one_based(u, n), node_from_one_based(v, n)) {
                _ if trailing => RejectReason::TrailingData,
                (Some(u), Some(v)) => {
                    graph.add_edge(u, v);
                    continue;
                }
                _ => RejectReason::OutOfRange,
            };

            warn!(line, u, v, n, %reason, "record skipped");
            rejected.push(RejectedEdge { line, u, v, reason });
        }

        debug!(
            n,
            edges = graph.number_of_edges(),
            rejected = rejected.len(),
            "edge list read"
        );

        Ok(EdgeListGraph { graph, rejected })
    }
}

/// Why a record did not become an edge
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// An endpoint lies outside of `1..=n`
    OutOfRange,
    /// The line holds more than two tokens
    TrailingData,
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::OutOfRange => write!(f, "endpoint out of range"),
            RejectReason::TrailingData => write!(f, "trailing data"),
        }
    }
}

/// A record that was skipped while reading
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RejectedEdge {
    /// 1-based line number of the record
    pub line: usize,
    pub u: i64,
    pub v: i64,
    pub reason: RejectReason,
}

/// A graph read from an edge list together with the records that were skipped
#[derive(Debug, Clone)]
pub struct EdgeListGraph<G> {
    pub graph: G,
    pub rejected: Vec<RejectedEdge>,
}

impl<G: GraphNew + GraphEdgeEditing + GraphEdgeOrder> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        Ok(self.try_read_with(reader, G::new)?.graph)
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphNew + GraphEdgeEditing + GraphEdgeOrder,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

impl GraphStore {
    /// Reads an edge list with default settings into the requested representation
    pub fn try_read_edge_list<R: BufRead>(
        reader: R,
        kind: RepresentationKind,
    ) -> Result<EdgeListGraph<GraphStore>> {
        EdgeListReader::default().try_read_with(reader, |n| GraphStore::new(n, kind))
    }

    /// Reads an edge list file with default settings into the requested representation
    pub fn try_read_edge_list_file<P: AsRef<Path>>(
        path: P,
        kind: RepresentationKind,
    ) -> Result<EdgeListGraph<GraphStore>> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?), kind)
    }
}

/// One `u v` line, ids as written in the file
struct EdgeRecord {
    line: usize,
    u: i64,
    v: i64,
    /// More tokens followed `u v`
    trailing: bool,
}

/// Iterator over the records of an edge list
struct EdgeListRecords<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of lines consumed so far
    line: usize,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListRecords<'a, R> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            comment_identifier,
        }
    }

    /// Parses the number of vertices from the first non-comment-line.
    /// Tokens after the first one are ignored.
    fn parse_header(&mut self) -> Result<NumNodes> {
        let header = self
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;

        let mut parts = header.split_whitespace();
        Ok(parse_next_value!(parts, "number of nodes"))
    }

    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line += 1;

            let trimmed = line.trim();
            if trimmed.is_empty()
                || (!self.comment_identifier.is_empty()
                    && trimmed.starts_with(self.comment_identifier))
            {
                continue;
            }

            return Ok(Some(line));
        }

        Ok(None)
    }

    /// Tries to parse an edge from the next non-comment-line
    fn parse_edge_line(&mut self) -> Result<Option<EdgeRecord>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();
        let u = parse_next_value!(parts, "source node");
        let v = parse_next_value!(parts, "target node");

        Ok(Some(EdgeRecord {
            line: self.line,
            u,
            v,
            trailing: parts.next().is_some(),
        }))
    }
}

impl<R: BufRead> Iterator for EdgeListRecords<'_, R> {
    type Item = Result<EdgeRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;

        for Edge(u, v) in graph.edges(true) {
            writeln!(writer, "{} {}", node_to_one_based(u), node_to_one_based(v))?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl<G: AdjacencyList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter.try_write_graph(self, writer)
    }

    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        EdgeListWriter.try_write_graph_file(self, path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use itertools::Itertools;

    use super::*;

    const CYCLE: &str = "c a 4-cycle\n4\n1 2\n2 3\n\n3 4\n4 1\n";

    #[test]
    fn read_cycle() {
        let g: AdjMatrixUndir = AdjMatrixUndir::try_read_edge_list(Cursor::new(CYCLE)).unwrap();

        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(
            g.ordered_edges(true),
            vec![Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(2, 3)]
        );
    }

    #[test]
    fn read_into_store() {
        let read = GraphStore::try_read_edge_list(Cursor::new(CYCLE), RepresentationKind::List)
            .unwrap();

        assert_eq!(read.graph.kind(), RepresentationKind::List);
        assert!(read.rejected.is_empty());
        assert_eq!(read.graph.neighbors_of(0).collect_vec(), vec![3, 1]);
    }

    #[test]
    fn out_of_range_records_are_skipped() {
        let input = "3\n1 2\n0 1\n2 4\n-1 2\n2 3\n";
        let read = EdgeListReader::new()
            .try_read_with(Cursor::new(input), AdjListUndir::new)
            .unwrap();

        assert_eq!(read.graph.number_of_edges(), 2);
        assert_eq!(read.graph.ordered_edges(true), vec![Edge(0, 1), Edge(1, 2)]);
        assert_eq!(
            read.rejected,
            vec![
                RejectedEdge {
                    line: 3,
                    u: 0,
                    v: 1,
                    reason: RejectReason::OutOfRange
                },
                RejectedEdge {
                    line: 4,
                    u: 2,
                    v: 4,
                    reason: RejectReason::OutOfRange
                },
                RejectedEdge {
                    line: 5,
                    u: -1,
                    v: 2,
                    reason: RejectReason::OutOfRange
                },
            ]
        );
    }

    #[test]
    fn records_with_trailing_data_are_skipped() {
        let input = "c weighted lines are not edges
4
1 2
2 3 7
3 4
4 9 x
";
        let read = EdgeListReader::new()
            .try_read_with(Cursor::new(input), AdjMatrixUndir::new)
            .unwrap();

        assert_eq!(read.graph.ordered_edges(true), vec![Edge(0, 1), Edge(2, 3)]);
        assert_eq!(
            read.rejected
                .iter()
                .map(|r| (r.line, r.reason))
                .collect_vec(),
            vec![(4, RejectReason::TrailingData), (6, RejectReason::TrailingData)]
        );
        assert_eq!(RejectReason::TrailingData.to_string(), "trailing data");
    }

    #[test]
    fn header_override_and_comments() {
        let input = "# custom comment\n1 2\n   \n2 3\n";
        let g: AdjMatrixUndir = EdgeListReader::new()
            .number_of_nodes(3)
            .comment_identifier("#")
            .try_read_graph(Cursor::new(input))
            .unwrap();

        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.number_of_edges(), 2);
    }

    #[test]
    fn malformed_input() {
        for input in ["", "c only comments\n", "x\n", "3\n1\n", "3\n1 b\n", "3\nx 2 3\n"] {
            let err = AdjListUndir::try_read_edge_list(Cursor::new(input)).unwrap_err();
            assert!(matches!(
                err.kind(),
                ErrorKind::NotFound | ErrorKind::InvalidData
            ));
        }
    }

    #[test]
    fn write_then_read_file() {
        let g = AdjListUndir::from_edges(5, [(0, 1), (3, 1), (4, 2)]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.txt");
        g.try_write_edge_list_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().next(), Some("5"));

        let read = AdjMatrixUndir::try_read_edge_list_file(&path).unwrap();
        assert_eq!(read.number_of_nodes(), 5);
        assert_eq!(read.ordered_edges(true), g.ordered_edges(true));

        let store =
            GraphStore::try_read_edge_list_file(&path, RepresentationKind::Matrix).unwrap();
        assert_eq!(store.graph.ordered_edges(true), g.ordered_edges(true));
    }
}
