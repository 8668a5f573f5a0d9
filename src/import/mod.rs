//! Importer for the line-oriented network format.
//!
//! ```text
//! *Vertices 3
//! *Edges
//! 1 2
//! 2 3
//! ```
//!
//! The first line starting with `*Vertices` gives the vertex count. Every line
//! after it, up to and including the next line starting with `*`, is skipped
//! uninterpreted. Each later line is an undirected edge between two 1-based
//! vertices and is stored as both directed adjacency records.
//!
//! Failures come in two tiers. A bad directive, a zero count or an unreadable
//! source aborts the import with an [`ImportError`]. A bad edge line is skipped
//! and recorded as a [`SkippedLine`]; the import carries on.

mod scan;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{EdgeLineError, ImportError, ImportResult};
use crate::graph::{Graph, VertexId};
use scan::{scan_int, scan_pair};

const VERTICES_DIRECTIVE: &str = "*Vertices";
const DIRECTIVE_PREFIX: char = '*';
const READER_PATH: &str = "<reader>";

/// Limits applied while importing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Largest vertex count accepted; `None` accepts any count that can be allocated.
    pub max_vertices: Option<usize>,
}

impl ImportOptions {
    pub fn with_max_vertices(mut self, limit: usize) -> Self {
        self.max_vertices = Some(limit);
        self
    }
}

/// An edge line that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line: usize,
    /// Line content without its terminator.
    pub text: String,
    pub reason: EdgeLineError,
}

/// A completed import.
#[derive(Debug, Clone)]
pub struct Import {
    pub graph: Graph,
    /// Number of edge lines accepted.
    pub edge_lines: usize,
    /// Edge lines that were ignored, in source order.
    pub skipped: Vec<SkippedLine>,
}

/// Parses the network format into a [`Graph`].
#[derive(Debug, Clone, Default)]
pub struct NetImporter {
    options: ImportOptions,
}

impl NetImporter {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    /// Imports the file at `path`.
    pub fn import_path(&self, path: impl AsRef<Path>) -> ImportResult<Import> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.import_from(BufReader::new(file), path)
    }

    /// Imports from any buffered reader.
    pub fn import_reader<R: BufRead>(&self, reader: R) -> ImportResult<Import> {
        self.import_from(reader, Path::new(READER_PATH))
    }

    /// Imports from an in-memory string.
    pub fn import_str(&self, text: &str) -> ImportResult<Import> {
        self.import_reader(text.as_bytes())
    }

    fn import_from<R: BufRead>(&self, reader: R, path: &Path) -> ImportResult<Import> {
        let mut lines = Lines::new(reader, path);

        let vertex_count = loop {
            let Some((number, line)) = lines.next_line()? else {
                return Err(ImportError::MissingVertexDirective);
            };
            if let Some(rest) = line.strip_prefix(VERTICES_DIRECTIVE) {
                break self.vertex_count(rest, number)?;
            }
        };

        let mut graph = Graph::try_new(vertex_count).map_err(|source| ImportError::Alloc {
            count: vertex_count,
            source,
        })?;

        // Vertex labels and the section marker are not interpreted.
        while let Some((_, line)) = lines.next_line()? {
            if line.starts_with(DIRECTIVE_PREFIX) {
                break;
            }
        }

        let mut edge_lines = 0;
        let mut skipped = Vec::new();
        while let Some((number, line)) = lines.next_line()? {
            match parse_edge(line, vertex_count) {
                Ok((a, b)) => {
                    graph.add_undirected_edge(a, b);
                    edge_lines += 1;
                }
                Err(reason) => {
                    debug!(line = number, %reason, "skipping edge line");
                    skipped.push(SkippedLine {
                        line: number,
                        text: line.to_owned(),
                        reason,
                    });
                }
            }
        }

        info!(
            vertices = vertex_count,
            edges = edge_lines,
            skipped = skipped.len(),
            "imported network"
        );

        Ok(Import {
            graph,
            edge_lines,
            skipped,
        })
    }

    fn vertex_count(&self, directive_rest: &str, line: usize) -> ImportResult<usize> {
        let invalid = || ImportError::InvalidVertexCount {
            line,
            text: format!("{VERTICES_DIRECTIVE}{directive_rest}"),
        };

        let (raw, _) = scan_int(directive_rest).ok_or_else(invalid)?;
        let count = usize::try_from(raw).map_err(|_| invalid())?;
        if count == 0 {
            return Err(ImportError::EmptyGraph);
        }
        if let Some(limit) = self.options.max_vertices {
            if count > limit {
                return Err(ImportError::TooManyVertices { count, limit });
            }
        }
        Ok(count)
    }
}

/// Parses one edge line into zero-based endpoints.
fn parse_edge(line: &str, vertex_count: usize) -> Result<(VertexId, VertexId), EdgeLineError> {
    let (a, b) = scan_pair(line).ok_or(EdgeLineError::Malformed)?;
    Ok((endpoint(a, vertex_count)?, endpoint(b, vertex_count)?))
}

fn endpoint(raw: i64, vertex_count: usize) -> Result<VertexId, EdgeLineError> {
    usize::try_from(raw)
        .ok()
        .filter(|v| (1..=vertex_count).contains(v))
        .map(|v| v - 1)
        .ok_or(EdgeLineError::OutOfRange {
            endpoint: raw,
            vertex_count,
        })
}

/// Line reader that tolerates invalid UTF-8 and tracks line numbers.
struct Lines<'p, R> {
    reader: R,
    path: &'p Path,
    buf: Vec<u8>,
    text: String,
    number: usize,
}

impl<'p, R: BufRead> Lines<'p, R> {
    fn new(reader: R, path: &'p Path) -> Self {
        Self {
            reader,
            path,
            buf: Vec::new(),
            text: String::new(),
            number: 0,
        }
    }

    /// Returns the next line number and the line without its terminator, or
    /// `None` at end of input.
    fn next_line(&mut self) -> ImportResult<Option<(usize, &str)>> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| ImportError::Io {
                path: PathBuf::from(self.path),
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }
        self.number += 1;

        self.text.clear();
        self.text.push_str(&String::from_utf8_lossy(&self.buf));
        Ok(Some((
            self.number,
            self.text.trim_end_matches(['\n', '\r']),
        )))
    }
}

impl Graph {
    /// Imports a graph from network-format text with default options.
    pub fn from_net_str(text: &str) -> ImportResult<Self> {
        NetImporter::default().import_str(text).map(|import| import.graph)
    }

    /// Imports a graph from a network-format file with default options.
    pub fn from_net_path(path: impl AsRef<Path>) -> ImportResult<Self> {
        NetImporter::default()
            .import_path(path)
            .map(|import| import.graph)
    }
}

impl FromStr for Graph {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_net_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(graph: &Graph, v: VertexId) -> Vec<VertexId> {
        graph.neighbors(v).collect()
    }

    #[test]
    fn test_import_path_graph() {
        let import = NetImporter::default()
            .import_str("*Vertices 3\n*Edges\n1 2\n2 3\n")
            .unwrap();
        let graph = &import.graph;
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(neighbors(graph, 0), vec![1]);
        assert_eq!(neighbors(graph, 1), vec![0, 2]);
        assert_eq!(neighbors(graph, 2), vec![1]);
        assert_eq!(import.edge_lines, 2);
        assert!(import.skipped.is_empty());
    }

    #[test]
    fn test_leading_lines_and_vertex_labels_are_ignored() {
        let text = "% comment\n*Network demo\n*Vertices 3 extra\n1 \"a\"\n2 \"b\"\n*Edges\n3 1\n";
        let graph = Graph::from_net_str(text).unwrap();
        assert_eq!(neighbors(&graph, 0), vec![2]);
        assert_eq!(neighbors(&graph, 2), vec![0]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_malformed_lines_are_recorded() {
        let text = "*Vertices 3\n*Edges\n1 2\nfoo bar\n2 9\n*Arcs\n2 3 0.5\n";
        let import = NetImporter::default().import_str(text).unwrap();
        assert_eq!(import.edge_lines, 2);
        assert_eq!(
            import.skipped,
            vec![
                SkippedLine {
                    line: 4,
                    text: "foo bar".into(),
                    reason: EdgeLineError::Malformed,
                },
                SkippedLine {
                    line: 5,
                    text: "2 9".into(),
                    reason: EdgeLineError::OutOfRange {
                        endpoint: 9,
                        vertex_count: 3,
                    },
                },
                SkippedLine {
                    line: 6,
                    text: "*Arcs".into(),
                    reason: EdgeLineError::Malformed,
                },
            ]
        );
        assert_eq!(neighbors(&import.graph, 1), vec![0, 2]);
    }

    #[test]
    fn test_zero_endpoint_is_out_of_range() {
        let import = NetImporter::default()
            .import_str("*Vertices 2\n*Edges\n0 1\n")
            .unwrap();
        assert_eq!(import.graph.edge_count(), 0);
        assert!(matches!(
            import.skipped[0].reason,
            EdgeLineError::OutOfRange { endpoint: 0, .. }
        ));
    }

    #[test]
    fn test_missing_directive() {
        let err = Graph::from_net_str("*Edges\n1 2\n").unwrap_err();
        assert!(matches!(err, ImportError::MissingVertexDirective));
    }

    #[test]
    fn test_directive_is_case_sensitive() {
        let err = Graph::from_net_str("*vertices 2\n*Edges\n1 2\n").unwrap_err();
        assert!(matches!(err, ImportError::MissingVertexDirective));
    }

    #[test]
    fn test_invalid_vertex_counts() {
        for text in ["*Vertices\n", "*Vertices abc\n", "*Vertices -4\n"] {
            let err = Graph::from_net_str(text).unwrap_err();
            assert!(
                matches!(err, ImportError::InvalidVertexCount { line: 1, .. }),
                "{text:?} gave {err:?}"
            );
        }
        let err = Graph::from_net_str("*Vertices 0\n").unwrap_err();
        assert!(matches!(err, ImportError::EmptyGraph));
    }

    #[test]
    fn test_vertex_limit() {
        let importer = NetImporter::new(ImportOptions::default().with_max_vertices(2));
        let err = importer.import_str("*Vertices 3\n").unwrap_err();
        assert!(matches!(
            err,
            ImportError::TooManyVertices { count: 3, limit: 2 }
        ));
    }

    #[test]
    fn test_no_edge_section_yields_isolated_vertices() {
        let graph = Graph::from_net_str("*Vertices 4\n1 \"a\"\n").unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_crlf_and_invalid_utf8() {
        let mut bytes = b"*Vertices 2\r\n*Edges\r\n1 2\r\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let import = NetImporter::default().import_reader(&bytes[..]).unwrap();
        assert_eq!(import.edge_lines, 1);
        assert_eq!(import.skipped.len(), 1);
    }

    #[test]
    fn test_from_str() {
        let graph: Graph = "*Vertices 2\n*Edges\n2 1\n".parse().unwrap();
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
    }
}
