//! Core graph data structure.
//!
//! The FamilyGraph wraps petgraph and adds indexes for person lookups.
//! Every other module of this crate reads the family through it: parents,
//! children and spouses are views over the same directed graph, filtered
//! by edge kind.

use crate::builder::GraphBuilder;
use crate::edge::EdgeKind;
use giapha_core::{Person, Relationship};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::trace;

/// Unique identifier for a node in the graph.
pub type NodeId = NodeIndex;

/// The family relationship graph.
///
/// Nodes are person ids borrowed from the input records. Ids referenced
/// by an edge but missing from the person list still get a node, so
/// traversals can pass through them; they simply have no person attached.
#[derive(Debug)]
pub struct FamilyGraph<'a> {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<&'a str, EdgeKind>,

    /// Maps person ids to graph node indexes.
    id_index: HashMap<&'a str, NodeId>,

    /// Person records by id.
    people: HashMap<&'a str, &'a Person>,

    /// Person records in input order.
    roster: Vec<&'a Person>,

    /// Maps full names to persons (for CLI lookups).
    name_index: HashMap<&'a str, Vec<&'a Person>>,
}

impl Default for FamilyGraph<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FamilyGraph<'a> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            id_index: HashMap::new(),
            people: HashMap::new(),
            roster: Vec::new(),
            name_index: HashMap::new(),
        }
    }

    /// Builds the graph for one set of records.
    pub fn from_records(persons: &'a [Person], relationships: &'a [Relationship]) -> Self {
        let mut builder = GraphBuilder::new();
        builder.add_persons(persons);
        builder.add_relationships(relationships);
        builder.build()
    }

    /// Returns the node for an id, creating a bare node if needed.
    pub fn ensure_node(&mut self, id: &'a str) -> NodeId {
        if let Some(&index) = self.id_index.get(id) {
            return index;
        }
        let index = self.graph.add_node(id);
        self.id_index.insert(id, index);
        index
    }

    /// Adds a person record. The first record seen for an id wins.
    pub fn add_person(&mut self, person: &'a Person) -> NodeId {
        let index = self.ensure_node(person.id.as_str());

        if self.people.contains_key(person.id.as_str()) {
            trace!("Ignoring duplicate person record {}", person.id);
            return index;
        }

        // Update indexes
        self.people.insert(person.id.as_str(), person);
        self.roster.push(person);
        self.name_index
            .entry(person.full_name.as_str())
            .or_default()
            .push(person);

        index
    }

    /// Adds an edge between two ids.
    ///
    /// Returns false when the same edge already exists or the edge is a
    /// self-loop. A marriage counts as existing in either direction, and
    /// any parent link between the same pair counts as the same link.
    pub fn add_edge(&mut self, from: &'a str, to: &'a str, kind: EdgeKind) -> bool {
        if from == to {
            trace!("Skipping self-referencing {} edge on {}", kind, from);
            return false;
        }

        let a = self.ensure_node(from);
        let b = self.ensure_node(to);

        let exists = |x: NodeId, y: NodeId| {
            self.graph
                .edges_connecting(x, y)
                .any(|edge| {
                    let existing = *edge.weight();
                    existing == kind || (existing.is_parent_link() && kind.is_parent_link())
                })
        };
        if exists(a, b) || (kind == EdgeKind::Marriage && exists(b, a)) {
            return false;
        }

        self.graph.add_edge(a, b, kind);
        true
    }

    /// Gets a person by id.
    pub fn person(&self, id: &str) -> Option<&'a Person> {
        self.people.get(id).copied()
    }

    /// Finds all persons with exactly this full name.
    pub fn find_by_name(&self, name: &str) -> Vec<&'a Person> {
        self.name_index.get(name).cloned().unwrap_or_default()
    }

    /// Looks a person up by id, falling back to full name.
    pub fn lookup(&self, query: &str) -> Vec<&'a Person> {
        match self.person(query) {
            Some(person) => vec![person],
            None => self.find_by_name(query),
        }
    }

    /// Iterates over person records in input order.
    pub fn persons(&self) -> impl Iterator<Item = &'a Person> + '_ {
        self.roster.iter().copied()
    }

    /// Parents of a person, in edge input order.
    pub fn parents_of(&self, id: &str) -> Vec<&'a str> {
        self.linked(id, &[Direction::Incoming], EdgeKind::is_parent_link)
    }

    /// Children of a person, in edge input order.
    pub fn children_of(&self, id: &str) -> Vec<&'a str> {
        self.linked(id, &[Direction::Outgoing], EdgeKind::is_parent_link)
    }

    /// Spouses of a person, in edge input order.
    pub fn spouses_of(&self, id: &str) -> Vec<&'a str> {
        self.linked(
            id,
            &[Direction::Outgoing, Direction::Incoming],
            |kind| kind == EdgeKind::Marriage,
        )
    }

    /// True if any parent edge points at this id.
    pub fn has_parents(&self, id: &str) -> bool {
        let Some(&index) = self.id_index.get(id) else {
            return false;
        };
        self.graph
            .edges_directed(index, Direction::Incoming)
            .any(|edge| edge.weight().is_parent_link())
    }

    pub fn are_married(&self, a: &str, b: &str) -> bool {
        self.spouses_of(a).iter().any(|&spouse| spouse == b)
    }

    /// Ids that have at least one child, in node order.
    pub fn parent_ids(&self) -> Vec<&'a str> {
        self.graph
            .node_indices()
            .filter(|&index| {
                self.graph
                    .edges_directed(index, Direction::Outgoing)
                    .any(|edge| edge.weight().is_parent_link())
            })
            .map(|index| self.graph[index])
            .collect()
    }

    /// Neighbours over edges of the wanted kinds, ordered by edge insertion.
    ///
    /// petgraph walks adjacency lists newest-first, so the edge index is
    /// used to restore input order.
    fn linked(
        &self,
        id: &str,
        directions: &[Direction],
        wanted: impl Fn(EdgeKind) -> bool,
    ) -> Vec<&'a str> {
        let Some(&index) = self.id_index.get(id) else {
            return Vec::new();
        };

        let mut found: Vec<(EdgeIndex, NodeId)> = Vec::new();
        for &direction in directions {
            for edge in self.graph.edges_directed(index, direction) {
                if !wanted(*edge.weight()) {
                    continue;
                }
                let other = match direction {
                    Direction::Incoming => edge.source(),
                    Direction::Outgoing => edge.target(),
                };
                found.push((edge.id(), other));
            }
        }

        found.sort_by_key(|(edge, _)| *edge);
        found.into_iter().map(|(_, node)| self.graph[node]).collect()
    }

    /// Returns the number of person records.
    pub fn person_count(&self) -> usize {
        self.roster.len()
    }

    /// Returns the number of nodes, including ids with no person record.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn count_edges(&self, wanted: impl Fn(EdgeKind) -> bool) -> usize {
        self.graph.edge_weights().filter(|&&kind| wanted(kind)).count()
    }
}

/// Family statistics for the status command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyStats {
    pub persons: usize,
    pub in_laws: usize,
    pub marriages: usize,
    pub parent_links: usize,
    /// Number of distinct generation levels reached from the roots.
    pub generations: usize,
    /// Persons with no recorded parent who were born into the family.
    pub roots: usize,
}

impl FamilyGraph<'_> {
    /// Returns family statistics.
    pub fn stats(&self) -> FamilyStats {
        let levels: BTreeSet<u32> = self.generations().into_values().collect();

        FamilyStats {
            persons: self.person_count(),
            in_laws: self.persons().filter(|p| p.is_in_law).count(),
            marriages: self.count_edges(|kind| kind == EdgeKind::Marriage),
            parent_links: self.count_edges(EdgeKind::is_parent_link),
            generations: levels.len(),
            roots: self.roots().len(),
        }
    }
}
