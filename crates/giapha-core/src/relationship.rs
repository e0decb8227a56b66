//! Relationship edges between persons.
//!
//! Child edges are directional (`person_a` is the parent, `person_b` the
//! child). Marriage edges are symmetric; the stored order only matters
//! for storage identity.

use serde::{Deserialize, Serialize};

/// The type of a relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// Symmetric marriage between `person_a` and `person_b`.
    Marriage,

    /// `person_a` is the biological parent of `person_b`.
    BiologicalChild,

    /// `person_a` is the adoptive parent of `person_b`.
    AdoptedChild,

    /// Any type string this version does not know. Contributes nothing.
    #[serde(other)]
    Other,
}

impl RelationshipKind {
    /// True for edges that link a parent to a child.
    pub fn is_parent_link(self) -> bool {
        matches!(
            self,
            RelationshipKind::BiologicalChild | RelationshipKind::AdoptedChild
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Marriage => "marriage",
            Self::BiologicalChild => "biological_child",
            Self::AdoptedChild => "adopted_child",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed edge between two persons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Storage id, if the record came from a datastore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub kind: RelationshipKind,

    pub person_a: String,

    pub person_b: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Relationship {
    /// Creates an edge of the given kind.
    pub fn new(
        kind: RelationshipKind,
        person_a: impl Into<String>,
        person_b: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            kind,
            person_a: person_a.into(),
            person_b: person_b.into(),
            note: None,
            created_at: None,
        }
    }

    pub fn marriage(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::new(RelationshipKind::Marriage, a, b)
    }

    /// Biological parent → child edge.
    pub fn child(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::new(RelationshipKind::BiologicalChild, parent, child)
    }

    /// Adoptive parent → child edge.
    pub fn adopted(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::new(RelationshipKind::AdoptedChild, parent, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names() {
        let edge: Relationship =
            serde_json::from_str(r#"{"type":"adopted_child","person_a":"a","person_b":"b"}"#)
                .unwrap();
        assert_eq!(edge.kind, RelationshipKind::AdoptedChild);
        assert!(edge.kind.is_parent_link());

        let json = serde_json::to_value(Relationship::marriage("a", "b")).unwrap();
        assert_eq!(json["type"], "marriage");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_unknown_kind_is_other() {
        let edge: Relationship =
            serde_json::from_str(r#"{"type":"godparent","person_a":"a","person_b":"b"}"#)
                .unwrap();
        assert_eq!(edge.kind, RelationshipKind::Other);
        assert!(!edge.kind.is_parent_link());
    }
}
