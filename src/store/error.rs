use std::fmt;

use crate::student::{StudentId, ValidationError};

/// Errors returned by [`StudentStore`](super::StudentStore) operations.
///
/// Lookup misses are ordinary results for callers to render, not faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record under this ID.
    NotFound(StudentId),
    /// No record with this name, or no name was given.
    NameNotFound(Option<String>),
    /// Create was called on an existing ID.
    AlreadyExists(StudentId),
    /// The ID exists but the supplied name differs from the stored one.
    NameMismatch { id: StudentId, name: String },
    /// ID outside the accepted lookup window `[min, max)`.
    OutOfRange { id: u32, min: u32, max: u32 },
    /// A record or patch broke a field rule.
    Invalid(ValidationError),
    LockPoisoned(&'static str),
}

impl StoreError {
    /// Whether this error belongs to the "request was malformed" category
    /// rather than the "request was fine but the lookup failed" category.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::OutOfRange { .. } | StoreError::Invalid(_))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(_) | StoreError::NameNotFound(_) => {
                write!(f, "Student not found")
            }
            StoreError::AlreadyExists(_) => write!(f, "Student already exists"),
            StoreError::NameMismatch { .. } => write!(f, "Student name does not match"),
            StoreError::OutOfRange { id, min, max } => write!(
                f,
                "student_id {} out of range (must be >= {} and < {})",
                id, min, max
            ),
            StoreError::Invalid(err) => write!(f, "{}", err),
            StoreError::LockPoisoned(operation) => {
                write!(f, "student store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Invalid(err)
    }
}
