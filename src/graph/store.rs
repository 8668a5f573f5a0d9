//! Vertex array with per-vertex ordered adjacency lists.
//!
//! Vertices are identified by their zero-based index and fixed in number at
//! construction. Each vertex owns its outgoing [`Edge`] records, kept sorted
//! ascending by destination at all times: [`Graph::add_edge`] splices every new
//! record into place instead of appending and sorting later. Destinations are
//! plain indices, so an edge references its target without owning it.

use core::cell::Cell;
use core::fmt;

use serde::Serialize;

use super::visited::VisitedFlags;
use crate::error::AllocError;

/// Zero-based vertex index.
pub type VertexId = usize;

/// A directed adjacency record, owned by the adjacency list of its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    dest: VertexId,
}

impl Edge {
    /// Destination vertex index.
    #[inline(always)]
    pub fn dest(&self) -> VertexId {
        self.dest
    }
}

/// An undirected graph stored as symmetric directed adjacency lists.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n)\) | One allocation per array |
/// | `add_edge` | \(O(\text{degree})\) | Ordered splice |
/// | `neighbors` | \(O(1)\) + iteration | Ascending destination order |
/// | `has_edge` | \(O(\log \text{degree})\) | Binary search |
/// | `reset_visited` | \(O(n)\) | |
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Box<[Vec<Edge>]>,
    visited: VisitedFlags,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices, no edges and every
    /// vertex unvisited.
    ///
    /// # Panics
    /// Panics if the vertex array cannot be allocated.
    pub fn new(vertex_count: usize) -> Self {
        match Self::try_new(vertex_count) {
            Ok(graph) => graph,
            Err(err) => panic!("graph of {vertex_count} vertices: {err}"),
        }
    }

    /// Like [`new`](Self::new), but reports allocation failure.
    pub fn try_new(vertex_count: usize) -> Result<Self, AllocError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);

        let mut flags = Vec::new();
        flags.try_reserve_exact(vertex_count)?;
        flags.resize_with(vertex_count, || Cell::new(false));

        Ok(Self {
            adjacency: adjacency.into_boxed_slice(),
            visited: VisitedFlags::from_cells(flags.into_boxed_slice()),
        })
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed adjacency records.
    ///
    /// Every undirected edge contributes two records.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Inserts an adjacency record `src -> dest`, keeping the list of `src`
    /// sorted ascending by destination.
    ///
    /// The new record is placed before the first existing record whose
    /// destination is `>= dest`. Duplicates are kept as distinct entries.
    ///
    /// # Panics
    /// Panics if `src` or `dest` is not a valid vertex index.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId) {
        let n = self.vertex_count();
        assert!(src < n, "source vertex {src} out of bounds for n={n}");
        assert!(dest < n, "destination vertex {dest} out of bounds for n={n}");

        let list = &mut self.adjacency[src];
        let at = list.partition_point(|edge| edge.dest < dest);
        list.insert(at, Edge { dest });
    }

    /// Inserts both directed records of the undirected edge `{a, b}`.
    ///
    /// # Panics
    /// Panics if `a` or `b` is not a valid vertex index.
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    /// Returns the adjacency records of `vertex`, ascending by destination.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn edges(&self, vertex: VertexId) -> &[Edge] {
        &self.adjacency[vertex]
    }

    /// Returns the neighbors of `vertex` in ascending order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency[vertex].iter().map(Edge::dest)
    }

    /// Returns the number of adjacency records of `vertex`.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency[vertex].len()
    }

    /// Checks whether a record `from -> to` exists.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency[from]
            .binary_search_by(|edge| edge.dest.cmp(&to))
            .is_ok()
    }

    /// Clears every visited flag.
    ///
    /// Takes `&self`: visited state is held apart from the topology.
    pub fn reset_visited(&self) {
        self.visited.clear();
    }

    /// Returns whether `vertex` was marked by the most recent traversal pass.
    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited.is_visited(vertex)
    }

    #[inline(always)]
    pub(crate) fn visited(&self) -> &VisitedFlags {
        &self.visited
    }

    /// Returns a displayable adjacency listing with 1-based identifiers.
    pub fn adjacency_listing(&self) -> AdjacencyListing<'_> {
        AdjacencyListing { graph: self }
    }
}

impl PartialEq for Graph {
    /// Graphs are equal when their topology is; visited state is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl Eq for Graph {}

/// One line per vertex: `vertex 2:->1->3`.
pub struct AdjacencyListing<'a> {
    graph: &'a Graph,
}

impl fmt::Display for AdjacencyListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in self.graph.adjacency.iter().enumerate() {
            write!(f, "vertex {}:", vertex + 1)?;
            for edge in list {
                write!(f, "->{}", edge.dest + 1)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
