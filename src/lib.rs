//! # `netgraph` - undirected graph engine
//!
//! Builds an undirected graph from a sparse edge-list text format and walks
//! it depth-first and breadth-first with explicit, bounded containers.
//!
//! ## Architecture
//!
//! 1. **Bounded containers** (`BoundedStack`, `BoundedQueue`):
//!    - Array-backed, allocated once, never resized
//!    - Capacity is the vertex count; overflow is reported, not absorbed
//!
//! 2. **Graph store** (`Graph`):
//!    - Fixed vertex array indexed by `VertexId`
//!    - Per-vertex adjacency lists kept ascending by destination on every insert
//!    - Visited flags held in cells apart from the topology
//!
//! 3. **Importer** (`NetImporter`):
//!    - `*Vertices N` directive, one skipped section marker, then `a b` edge lines
//!    - Fatal errors (`ImportError`) kept apart from skipped lines (`SkippedLine`)
//!
//! 4. **Traversal engine** (`Graph::depth_first`, `Graph::breadth_first`):
//!    - Outer ascending loop reaches every component
//!    - Events streamed through `TraversalVisitor`
//!
//! ## Example
//!
//! ```
//! use netgraph::Graph;
//!
//! let graph = Graph::from_net_str("*Vertices 4\n*Edges\n1 2\n3 4\n").unwrap();
//! let dfs = graph.depth_first();
//! assert_eq!(dfs.roots(), vec![0, 2]);
//! assert_eq!(dfs.visit_order(), vec![0, 1, 2, 3]);
//! ```

pub mod collections;
pub mod error;
pub mod graph;
pub mod import;
pub mod observability;
pub mod traversal;

pub use collections::{BoundedQueue, BoundedStack};
pub use error::{AllocError, CapacityError, EdgeLineError, ImportError, ImportResult};
pub use graph::{Edge, Graph, VertexId};
pub use import::{Import, ImportOptions, NetImporter, SkippedLine};
pub use traversal::{
    Component, TraversalEvent, TraversalOrder, TraversalReport, TraversalVisitor,
};
