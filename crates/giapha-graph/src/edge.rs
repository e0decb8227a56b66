//! Edge types for the family graph.
//!
//! Parent edges point from parent to child. A marriage is stored once,
//! in the direction it was recorded, and read in both directions.

use giapha_core::RelationshipKind;
use serde::{Deserialize, Serialize};

/// The type of relationship between two graph nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Parent → biological child.
    BiologicalChild,

    /// Parent → adopted child.
    AdoptedChild,

    /// Spouse ↔ spouse.
    Marriage,
}

impl EdgeKind {
    /// Maps a stored relationship type onto a graph edge.
    ///
    /// Unknown types produce no edge.
    pub fn from_relationship(kind: RelationshipKind) -> Option<Self> {
        match kind {
            RelationshipKind::BiologicalChild => Some(EdgeKind::BiologicalChild),
            RelationshipKind::AdoptedChild => Some(EdgeKind::AdoptedChild),
            RelationshipKind::Marriage => Some(EdgeKind::Marriage),
            RelationshipKind::Other => None,
        }
    }

    pub fn is_parent_link(self) -> bool {
        matches!(self, EdgeKind::BiologicalChild | EdgeKind::AdoptedChild)
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BiologicalChild => "biological_child",
            Self::AdoptedChild => "adopted_child",
            Self::Marriage => "marriage",
        };
        write!(f, "{}", s)
    }
}
