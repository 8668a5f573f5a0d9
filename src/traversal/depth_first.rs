//! Iterative depth-first traversal with an explicit stack.
//!
//! A vertex is marked visited when it is discovered and pushed, not when it is
//! popped. Each vertex therefore enters the stack at most once per pass, which
//! bounds the stack by the vertex count. Neighbors are pushed in ascending
//! order, so within a component they pop in reverse discovery order.

use tracing::{debug, trace};

use super::{TraversalOrder, TraversalReport, TraversalVisitor};
use crate::collections::BoundedStack;
use crate::graph::{Graph, VertexId};

impl Graph {
    /// Runs a depth-first pass over every component and collects the result.
    pub fn depth_first(&self) -> TraversalReport {
        let mut report = TraversalReport::new(TraversalOrder::DepthFirst);
        self.depth_first_with(&mut report);
        report
    }

    /// Runs a depth-first pass over every component, streaming events to `visitor`.
    pub fn depth_first_with<V: TraversalVisitor + ?Sized>(&self, visitor: &mut V) {
        let visited = self.visited();
        visited.clear();

        let mut stack = BoundedStack::with_capacity(self.vertex_count());

        for root in 0..self.vertex_count() {
            if !visited.try_visit(root) {
                continue;
            }
            debug!(root, "depth-first component");
            visitor.start_component(root);
            push(&mut stack, root);

            while let Some(vertex) = stack.pop() {
                trace!(vertex, "visit");
                visitor.visit(vertex);
                for next in self.neighbors(vertex) {
                    if visited.try_visit(next) {
                        push(&mut stack, next);
                    }
                }
            }
        }
    }
}

fn push(stack: &mut BoundedStack, vertex: VertexId) {
    // Vertices are marked before they are pushed, so at most one copy of each is pending.
    if let Err(err) = stack.push(vertex) {
        panic!("depth-first stack overflow pushing vertex {vertex}: {err}");
    }
}
