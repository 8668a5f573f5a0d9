//! Iterative breadth-first traversal with an explicit circular queue.
//!
//! A vertex is marked visited when it is dequeued, and a dequeued vertex that
//! is already visited is skipped. A traversal-local `queued` flag admits each
//! vertex to the queue once per pass, which bounds the queue by the vertex
//! count without changing the level order.

use tracing::{debug, trace};

use super::{TraversalOrder, TraversalReport, TraversalVisitor};
use crate::collections::BoundedQueue;
use crate::graph::{Graph, VertexId};

impl Graph {
    /// Runs a breadth-first pass over every component and collects the result.
    pub fn breadth_first(&self) -> TraversalReport {
        let mut report = TraversalReport::new(TraversalOrder::BreadthFirst);
        self.breadth_first_with(&mut report);
        report
    }

    /// Runs a breadth-first pass over every component, streaming events to `visitor`.
    pub fn breadth_first_with<V: TraversalVisitor + ?Sized>(&self, visitor: &mut V) {
        let visited = self.visited();
        visited.clear();

        let n = self.vertex_count();
        let mut queue = BoundedQueue::with_capacity(n);
        let mut queued = vec![false; n];

        for root in 0..n {
            if visited.is_visited(root) {
                continue;
            }
            debug!(root, "breadth-first component");
            visitor.start_component(root);
            enqueue(&mut queue, &mut queued, root);

            while let Some(vertex) = queue.dequeue() {
                if !visited.try_visit(vertex) {
                    continue;
                }
                trace!(vertex, "visit");
                visitor.visit(vertex);
                for next in self.neighbors(vertex) {
                    if !visited.is_visited(next) {
                        enqueue(&mut queue, &mut queued, next);
                    }
                }
            }
        }
    }
}

fn enqueue(queue: &mut BoundedQueue, queued: &mut [bool], vertex: VertexId) {
    if queued[vertex] {
        return;
    }
    queued[vertex] = true;
    if let Err(err) = queue.enqueue(vertex) {
        panic!("breadth-first queue overflow enqueuing vertex {vertex}: {err}");
    }
}
