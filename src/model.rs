//! Client record type and input validation
//!
//! Validation is explicit: callers run the `validate_*` functions before
//! handing data to the store, and the store re-checks the id format on
//! insert so the uniqueness/format invariants hold regardless of caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Required id length, in characters
pub const ID_LEN: usize = 3;

/// Minimum name length, in characters
pub const NAME_MIN: usize = 2;

/// Maximum name length, in characters
pub const NAME_MAX: usize = 30;

/// A client record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique 3-character identifier, immutable after creation
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Why a field was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("id must be exactly 3 characters")]
    IdLength,

    #[error("{field} must be between 2 and 30 characters")]
    NameLength { field: &'static str },
}

/// Check the id format (exactly [`ID_LEN`] characters)
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id.chars().count() == ID_LEN {
        Ok(())
    } else {
        Err(ValidationError::IdLength)
    }
}

/// Check a name field length ([`NAME_MIN`]..=[`NAME_MAX`] characters)
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if (NAME_MIN..=NAME_MAX).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::NameLength { field })
    }
}
