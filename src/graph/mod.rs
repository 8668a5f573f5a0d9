//! Graph store: a fixed vertex array with ordered adjacency lists and
//! per-vertex visited flags.

pub mod store;
pub mod visited;

pub use store::{AdjacencyListing, Edge, Graph, VertexId};
pub use visited::VisitedFlags;
