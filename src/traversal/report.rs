//! Collected traversal results and their text rendering.

use core::fmt;

use super::TraversalVisitor;
use crate::graph::VertexId;

/// Which engine produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    DepthFirst,
    BreadthFirst,
}

impl TraversalOrder {
    pub fn title(self) -> &'static str {
        match self {
            Self::DepthFirst => "Depth-First",
            Self::BreadthFirst => "Breadth-First",
        }
    }
}

/// The vertices of one component, in visitation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Lowest-indexed vertex of the component, where the traversal started.
    pub root: VertexId,
    pub vertices: Vec<VertexId>,
}

/// Result of one traversal pass. Indices are zero-based.
///
/// `Display` renders the pass with 1-based identifiers:
///
/// ```text
/// Depth-First Traversal starting from vertex 1:
/// 1 2 3 
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    pub order: TraversalOrder,
    pub components: Vec<Component>,
}

impl TraversalReport {
    pub fn new(order: TraversalOrder) -> Self {
        Self {
            order,
            components: Vec::new(),
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Roots of every component, ascending.
    pub fn roots(&self) -> Vec<VertexId> {
        self.components.iter().map(|c| c.root).collect()
    }

    /// All visited vertices across components, in visitation order.
    pub fn visit_order(&self) -> Vec<VertexId> {
        self.components
            .iter()
            .flat_map(|c| c.vertices.iter().copied())
            .collect()
    }
}

impl TraversalVisitor for TraversalReport {
    fn start_component(&mut self, root: VertexId) {
        self.components.push(Component {
            root,
            vertices: Vec::new(),
        });
    }

    fn visit(&mut self, vertex: VertexId) {
        match self.components.last_mut() {
            Some(component) => component.vertices.push(vertex),
            None => panic!("vertex {vertex} visited before any component started"),
        }
    }
}

impl fmt::Display for TraversalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.order.title();
        for component in &self.components {
            writeln!(
                f,
                "{title} Traversal starting from vertex {}:",
                component.root + 1
            )?;
            for vertex in &component.vertices {
                write!(f, "{} ", vertex + 1)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
