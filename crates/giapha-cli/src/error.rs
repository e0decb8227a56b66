//! Errors raised by CLI commands.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("no person matches '{0}' (tried id, then full name)")]
    UnknownPerson(String),

    #[error("'{query}' matches {count} persons; use an id instead")]
    AmbiguousPerson { query: String, count: usize },

    #[error("backup file not found: {0} (pass --data or run `giapha init`)")]
    MissingData(String),
}
