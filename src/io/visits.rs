//! # Visits
//!
//! Text output of a traversal: one line `Vertex: x, Parent: y, Level: z` per visited
//! vertex in visit order, with 1-based vertex ids.

use super::*;
use crate::algo::{VisitRecord, VisitSink};

/// A [`VisitSink`] that formats every visit to a writer.
///
/// Since sinks cannot fail, the first I/O error is kept and all later visits are dropped;
/// [`VisitWriter::finish`] reports it.
#[derive(Debug)]
pub struct VisitWriter<W: Write> {
    writer: W,
    written: usize,
    error: Option<std::io::Error>,
}

impl<W: Write> VisitWriter<W> {
    /// Wraps a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            error: None,
        }
    }

    /// Returns the number of lines written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes the writer and returns it, or the first error that occurred
    pub fn finish(mut self) -> Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> VisitSink for VisitWriter<W> {
    fn visit(&mut self, record: VisitRecord) {
        if self.error.is_some() {
            return;
        }

        let result = writeln!(
            self.writer,
            "Vertex: {}, Parent: {}, Level: {}",
            node_to_one_based(record.vertex),
            node_to_one_based(record.parent),
            record.level
        );

        match result {
            Ok(()) => self.written += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::Traversal;

    /// Accepts `limit` bytes, then fails every write
    #[derive(Debug)]
    struct FailingWriter {
        limit: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> Result<usize> {
            if self.limit < buf.len() {
                return Err(io_error!(ErrorKind::WriteZero, "disk full"));
            }
            self.limit -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_based_lines() {
        let g = AdjMatrixUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);

        let mut sink = VisitWriter::new(Vec::new());
        let mut labels = crate::algo::TraversalLabels::new(4);
        g.bfs_tree_with(0, &mut labels, &mut sink).unwrap();

        assert_eq!(sink.written(), 4);
        let text = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "Vertex: 1, Parent: 1, Level: 0\n\
             Vertex: 2, Parent: 1, Level: 1\n\
             Vertex: 4, Parent: 1, Level: 1\n\
             Vertex: 3, Parent: 2, Level: 2\n"
        );
    }

    #[test]
    fn latches_first_error() {
        let mut sink = VisitWriter::new(FailingWriter { limit: 40 });
        for vertex in 0..3 {
            sink.visit(VisitRecord {
                vertex,
                parent: 0,
                level: vertex,
            });
        }

        assert_eq!(sink.written(), 1);
        let err = sink.finish().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteZero);
    }
}
