//! Per-vertex visited flags for traversal passes.
//!
//! Flags live apart from the graph topology in interior-mutable cells, so a
//! traversal reads the adjacency lists through `&Graph` while still marking
//! vertices. `Cell` keeps the graph `!Sync`: two traversals of one graph can
//! never run on different threads at once.

use core::cell::Cell;

/// A per-vertex visited flag vector.
#[derive(Debug, Clone)]
pub struct VisitedFlags {
    flags: Box<[Cell<bool>]>,
}

impl VisitedFlags {
    pub(crate) fn from_cells(flags: Box<[Cell<bool>]>) -> Self {
        Self { flags }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Clears every flag.
    pub fn clear(&self) {
        for flag in self.flags.iter() {
            flag.set(false);
        }
    }

    /// Returns `true` iff the vertex was not yet visited, marking it visited.
    #[inline(always)]
    pub fn try_visit(&self, vertex: usize) -> bool {
        !self.flags[vertex].replace(true)
    }

    #[inline(always)]
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.flags[vertex].get()
    }

    /// Number of vertices currently marked.
    pub fn visited_count(&self) -> usize {
        self.flags.iter().filter(|f| f.get()).count()
    }
}
