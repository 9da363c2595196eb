//! Container graph accumulation
//!
//! One `ContainerGraph` instance exists per request and is its single owner.
//! The interface is append-only: membership derivation and every parsed
//! document add quads, and the serializer reads the whole thing once all
//! appends are done. Duplicates are kept; insertion order is preserved so
//! output is deterministic.

use crate::rdf::Quad;

/// Append-only quad accumulator for one request
#[derive(Debug, Default)]
pub struct ContainerGraph {
    quads: Vec<Quad>,
}

impl ContainerGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one quad
    pub fn add_quad(&mut self, quad: Quad) {
        self.quads.push(quad);
    }

    /// All accumulated quads, in insertion order
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Number of accumulated quads
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Whether no quads have been appended yet
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Literal, NamedNode, Quad, RdfPredicate};

    fn sample_quad() -> Quad {
        Quad::new(
            NamedNode::new("http://example.org/a").unwrap(),
            RdfPredicate::new("http://example.org/p").unwrap(),
            Literal::new_simple("v"),
            None,
        )
    }

    #[test]
    fn test_append_preserves_order() {
        let mut graph = ContainerGraph::new();
        assert!(graph.is_empty());

        let first = Quad::new(
            NamedNode::new("http://example.org/first").unwrap(),
            RdfPredicate::new("http://example.org/p").unwrap(),
            Literal::new_simple("1"),
            None,
        );
        graph.add_quad(first.clone());
        graph.add_quad(sample_quad());

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.quads()[0], first);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut graph = ContainerGraph::new();
        graph.add_quad(sample_quad());
        graph.add_quad(sample_quad());
        assert_eq!(graph.len(), 2);
    }
}
