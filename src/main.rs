use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use tracing::warn;

use netgraph::observability;
use netgraph::{Graph, ImportOptions, NetImporter, TraversalReport};

#[derive(Parser)]
#[command(name = "netgraph", version)]
#[command(about = "Print the adjacency lists and DFS/BFS traversals of a network file", long_about = None)]
struct Cli {
    /// Network file: `*Vertices N`, a section marker, then `a b` edge lines
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Reject files declaring more vertices than this
    #[arg(long)]
    max_vertices: Option<usize>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); overridden by RUST_LOG
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport {
    vertices: usize,
    adjacency: Vec<Vec<usize>>,
    depth_first: Vec<JsonComponent>,
    breadth_first: Vec<JsonComponent>,
}

#[derive(Serialize)]
struct JsonComponent {
    root: usize,
    vertices: Vec<usize>,
}

impl JsonReport {
    /// Identifiers are 1-based, as in the input file.
    fn new(graph: &Graph, dfs: &TraversalReport, bfs: &TraversalReport) -> Self {
        let adjacency = (0..graph.vertex_count())
            .map(|v| graph.neighbors(v).map(|n| n + 1).collect())
            .collect();
        Self {
            vertices: graph.vertex_count(),
            adjacency,
            depth_first: components(dfs),
            breadth_first: components(bfs),
        }
    }
}

fn components(report: &TraversalReport) -> Vec<JsonComponent> {
    report
        .components
        .iter()
        .map(|c| JsonComponent {
            root: c.root + 1,
            vertices: c.vertices.iter().map(|v| v + 1).collect(),
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // Usage errors go to stderr with status 1.
                let _ = err.print();
                std::process::exit(1);
            }
        },
    };

    observability::init_logging(cli.verbose);

    let mut options = ImportOptions::default();
    if let Some(limit) = cli.max_vertices {
        options = options.with_max_vertices(limit);
    }

    let import = NetImporter::new(options)
        .import_path(&cli.file)
        .with_context(|| format!("failed to import {}", cli.file.display()))?;
    if !import.skipped.is_empty() {
        warn!(
            skipped = import.skipped.len(),
            first_line = import.skipped[0].line,
            "ignored malformed edge lines"
        );
    }

    let graph = import.graph;
    let dfs = graph.depth_first();
    let bfs = graph.breadth_first();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => {
            write!(out, "{}", graph.adjacency_listing())?;
            write!(out, "{dfs}")?;
            write!(out, "{bfs}")?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &JsonReport::new(&graph, &dfs, &bfs))
                .context("failed to write JSON report")?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
