//! Gia Pha Graph - Family relationship reasoning
//!
//! This crate turns flat person and relationship records into a family
//! graph and derives everything the tree needs from it: generation
//! numbers, birth order among siblings, and the pair of Vietnamese kinship
//! terms two persons use for each other.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with additional indexes for:
//! - Id and name lookups
//! - Parent, child and spouse adjacency in input order
//!
//! All functions are pure. The graph borrows the records it was built
//! from and is rebuilt for every call of the `compute_*` helpers.
//!
//! # Example
//!
//! ```
//! use giapha_core::{Gender, Person, Relationship};
//! use giapha_graph::{compute_generations, compute_kinship};
//!
//! let persons = vec![
//!     Person::new("dad", "Nguyễn Văn An", Gender::Male),
//!     Person::new("son", "Nguyễn Văn Bình", Gender::Male),
//! ];
//! let relationships = vec![Relationship::child("dad", "son")];
//!
//! let generations = compute_generations(&persons, &relationships);
//! assert_eq!(generations["son"], 2);
//!
//! let kinship = compute_kinship(&persons[1], &persons[0], &persons, &relationships).unwrap();
//! assert_eq!(kinship.a_calls_b.to_string(), "Cha");
//! ```

mod ancestry;
mod birth_order;
mod builder;
mod edge;
mod generation;
mod graph;
pub mod kinship;
mod lineage;

pub use ancestry::{AncestorEntry, AncestryIndex, CommonAncestor};
pub use birth_order::compute_birth_orders;
pub use builder::GraphBuilder;
pub use edge::EdgeKind;
pub use generation::compute_generations;
pub use graph::{FamilyGraph, FamilyStats, NodeId};
pub use kinship::{compute_kinship, KinshipResult, Term};
pub use lineage::{plan_lineage, LineagePlan, LineageUpdate};
