//! Depth-first and breadth-first traversal over a [`Graph`](crate::graph::Graph).
//!
//! Both engines run an outer loop over vertices in ascending index order and
//! start a new component at every vertex the previous components did not
//! reach, so every vertex is visited exactly once per pass. Pending vertices
//! live in a [`BoundedStack`](crate::collections::BoundedStack) or
//! [`BoundedQueue`](crate::collections::BoundedQueue) sized to the vertex
//! count and owned by the traversal call.
//!
//! Each pass clears the graph's visited flags before it starts and leaves them
//! set when it finishes.
//!
//! Results are delivered as events to a [`TraversalVisitor`]; the
//! `depth_first`/`breadth_first` shorthands collect them into a
//! [`TraversalReport`].

mod breadth_first;
mod depth_first;
mod report;

pub use report::{Component, TraversalOrder, TraversalReport};

use crate::graph::VertexId;

/// Receives traversal events in the order they occur.
pub trait TraversalVisitor {
    /// A new component begins at `root`. Called before the first `visit` of the component.
    fn start_component(&mut self, root: VertexId);

    /// `vertex` is visited.
    fn visit(&mut self, vertex: VertexId);
}

/// A recorded traversal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent {
    ComponentStart(VertexId),
    Visit(VertexId),
}

impl TraversalVisitor for Vec<TraversalEvent> {
    fn start_component(&mut self, root: VertexId) {
        self.push(TraversalEvent::ComponentStart(root));
    }

    fn visit(&mut self, vertex: VertexId) {
        self.push(TraversalEvent::Visit(vertex));
    }
}
