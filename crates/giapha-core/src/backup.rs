//! JSON backup payload.
//!
//! The hosted application exports the whole family as one JSON document
//! holding every person and every relationship. The CLI reads the same
//! document, and writes it back after applying recomputed lineage values.

use crate::error::{Error, Result};
use crate::person::Person;
use crate::relationship::Relationship;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Current backup schema version (persons carry `birth_order` and `generation`).
pub const BACKUP_VERSION: u32 = 2;

fn default_version() -> u32 {
    BACKUP_VERSION
}

/// A complete family snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupPayload {
    #[serde(default = "default_version")]
    pub version: u32,

    /// RFC 3339 time the snapshot was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    pub persons: Vec<Person>,

    pub relationships: Vec<Relationship>,
}

impl BackupPayload {
    /// Creates a payload at the current schema version without a timestamp.
    pub fn new(persons: Vec<Person>, relationships: Vec<Relationship>) -> Self {
        Self {
            version: BACKUP_VERSION,
            timestamp: None,
            persons,
            relationships,
        }
    }

    /// Parses and validates a payload.
    pub fn from_json(json: &str) -> Result<Self> {
        let payload: BackupPayload = serde_json::from_str(json)?;
        payload.validate()?;
        Ok(payload)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects payloads that cannot describe a family.
    pub fn validate(&self) -> Result<()> {
        if self.persons.is_empty() {
            return Err(Error::EmptyPersons);
        }
        Ok(())
    }

    /// Reads a payload from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let payload = Self::from_json(&json)?;
        debug!(
            "Loaded {} persons and {} relationships from {}",
            payload.persons.len(),
            payload.relationships.len(),
            path.display()
        );
        Ok(payload)
    }

    /// Writes the payload to disk as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    pub fn find_person(&self, id: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }
}
