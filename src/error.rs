//! Error types shared across the crate.
//!
//! Import failures come in two tiers. [`ImportError`] is fatal: no graph is
//! produced. [`EdgeLineError`] describes a single edge record that was skipped;
//! it never aborts an import and is reported alongside the finished graph.

use std::path::PathBuf;

use thiserror::Error;

/// The error type for allocation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("memory allocation failed")]
pub struct AllocError;

impl From<std::collections::TryReserveError> for AllocError {
    fn from(_: std::collections::TryReserveError) -> Self {
        AllocError
    }
}

/// Returned when pushing into a full [`BoundedStack`](crate::collections::BoundedStack)
/// or [`BoundedQueue`](crate::collections::BoundedQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("container is full (capacity {capacity})")]
pub struct CapacityError {
    /// Fixed capacity of the container that rejected the element.
    pub capacity: usize,
}

/// Fatal import failures. No graph is produced.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The source could not be opened or read.
    #[error("failed to read {path}")]
    Io {
        /// Path of the source, or `<reader>` for in-memory input.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// No line starting with `*Vertices` was found.
    #[error("no `*Vertices` directive found")]
    MissingVertexDirective,

    /// The `*Vertices` line did not carry a usable count.
    #[error("invalid vertex count on line {line}: {text:?}")]
    InvalidVertexCount {
        /// 1-based line number of the directive.
        line: usize,
        /// The directive line as read.
        text: String,
    },

    /// The declared vertex count was zero.
    #[error("vertex count is zero")]
    EmptyGraph,

    /// The declared vertex count exceeds [`ImportOptions::max_vertices`](crate::import::ImportOptions).
    #[error("vertex count {count} exceeds the configured limit of {limit}")]
    TooManyVertices {
        /// Declared count.
        count: usize,
        /// Configured limit.
        limit: usize,
    },

    /// The vertex array could not be allocated.
    #[error("could not allocate a graph of {count} vertices")]
    Alloc {
        /// Declared count.
        count: usize,
        #[source]
        source: AllocError,
    },
}

/// Why a single edge line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeLineError {
    /// The line does not start with two integers.
    #[error("expected two integers")]
    Malformed,

    /// An endpoint lies outside `1..=vertex_count`.
    #[error("endpoint {endpoint} outside 1..={vertex_count}")]
    OutOfRange {
        /// The offending 1-based endpoint as written.
        endpoint: i64,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
