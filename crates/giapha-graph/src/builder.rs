//! Graph builder for constructing the family graph from flat records.
//!
//! The builder takes person records and relationship edges and turns them
//! into the parent/child and marriage adjacency the resolvers walk.

use crate::edge::EdgeKind;
use crate::graph::FamilyGraph;
use giapha_core::{Person, Relationship};
use tracing::debug;

/// Builds a FamilyGraph from persons and relationships.
///
/// The builder handles the two-pass process:
/// 1. Add all persons to the graph
/// 2. Resolve relationships into edges (creating bare nodes for ids
///    that have no person record)
pub struct GraphBuilder<'a> {
    graph: FamilyGraph<'a>,
    pending: Vec<&'a Relationship>,
}

impl Default for GraphBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GraphBuilder<'a> {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            graph: FamilyGraph::new(),
            pending: Vec::new(),
        }
    }

    /// Adds person records to the graph.
    pub fn add_persons(&mut self, persons: &'a [Person]) {
        for person in persons {
            self.graph.add_person(person);
        }
    }

    /// Queues relationships; they become edges in `build`.
    pub fn add_relationships(&mut self, relationships: &'a [Relationship]) {
        self.pending.extend(relationships);
    }

    /// Resolves queued relationships into graph edges.
    ///
    /// Edges keep input order. Unknown relationship types are dropped.
    pub fn resolve_edges(&mut self) {
        let mut skipped = 0usize;

        for relationship in self.pending.drain(..) {
            let Some(kind) = EdgeKind::from_relationship(relationship.kind) else {
                skipped += 1;
                continue;
            };
            if !self
                .graph
                .add_edge(&relationship.person_a, &relationship.person_b, kind)
            {
                skipped += 1;
            }
        }

        if skipped > 0 {
            debug!("Skipped {} relationships that produced no edge", skipped);
        }
    }

    /// Finishes building and returns the graph.
    pub fn build(mut self) -> FamilyGraph<'a> {
        self.resolve_edges();
        debug!(
            "Built family graph: {} persons, {} nodes, {} edges",
            self.graph.person_count(),
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }
}
