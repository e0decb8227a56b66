//! Person records.
//!
//! A person carries identity fields owned by the surrounding application
//! and two computed fields (`generation`, `birth_order`) that the graph
//! crate proposes updates for.

use serde::{Deserialize, Serialize};

/// Gender as stored in the family records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn is_male(self) -> bool {
        self == Gender::Male
    }

    pub fn is_female(self) -> bool {
        self == Gender::Female
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A member of the family tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Opaque identifier (a UUID in the hosted application).
    pub id: String,

    pub full_name: String,

    #[serde(default)]
    pub gender: Gender,

    #[serde(default)]
    pub birth_year: Option<i32>,

    /// 1-based rank among siblings, computed.
    #[serde(default)]
    pub birth_order: Option<u32>,

    /// 1-based distance from the root ancestors, computed.
    #[serde(default)]
    pub generation: Option<u32>,

    /// Joined the family by marriage rather than birth.
    #[serde(default)]
    pub is_in_law: bool,

    // Biographical fields. Carried through backups, never read by the engine.
    #[serde(default)]
    pub birth_month: Option<u8>,
    #[serde(default)]
    pub birth_day: Option<u8>,
    #[serde(default)]
    pub death_year: Option<i32>,
    #[serde(default)]
    pub death_month: Option<u8>,
    #[serde(default)]
    pub death_day: Option<u8>,
    #[serde(default)]
    pub is_deceased: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Person {
    /// Creates a person with only identity fields set.
    pub fn new(id: impl Into<String>, full_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            gender,
            birth_year: None,
            birth_order: None,
            generation: None,
            is_in_law: false,
            birth_month: None,
            birth_day: None,
            death_year: None,
            death_month: None,
            death_day: None,
            is_deceased: false,
            avatar_url: None,
            note: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    pub fn with_birth_order(mut self, order: u32) -> Self {
        self.birth_order = Some(order);
        self
    }

    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Marks the person as having joined the family by marriage.
    pub fn in_law(mut self) -> Self {
        self.is_in_law = true;
        self
    }
}
