//! Gia Pha Core - Family tree data model
//!
//! This crate defines the records every other Gia Pha crate works with:
//! persons, typed relationship edges, and the JSON backup payload that
//! carries both between the application and the reasoning engine.
//!
//! # Example
//!
//! ```
//! use giapha_core::{Gender, Person, Relationship};
//!
//! let father = Person::new("p1", "Nguyễn Văn An", Gender::Male).with_birth_year(1950);
//! let son = Person::new("p2", "Nguyễn Văn Bình", Gender::Male).with_birth_year(1980);
//! let edge = Relationship::child(&father.id, &son.id);
//!
//! assert!(edge.kind.is_parent_link());
//! ```

pub mod backup;
pub mod collate;
pub mod error;
pub mod person;
pub mod relationship;

pub use backup::{BackupPayload, BACKUP_VERSION};
pub use collate::compare_names;
pub use error::{Error, Result};
pub use person::{Gender, Person};
pub use relationship::{Relationship, RelationshipKind};
