use thiserror::Error;

/// Errors raised while loading or validating family data.
///
/// The reasoning engine itself never fails; these only cover the
/// caller-level checks made before data reaches it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("backup contains no persons to restore")]
    EmptyPersons,

    #[error("invalid backup JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
