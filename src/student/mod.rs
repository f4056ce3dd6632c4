//! Student domain types.
//!
//! A student is a strongly typed record keyed by a positive integer ID.
//! Full records are required for creation; updates carry an [`UpdatePatch`]
//! whose fields are tri-state [`Patch`] values, so "field omitted" and
//! "field explicitly null" never collapse into each other.
//!
//! ## Example
//!
//! ```ignore
//! use student_registry::{StudentId, StudentRecord, UpdatePatch, Patch};
//!
//! let id = StudentId::new(2)?;
//! let mut alex = StudentRecord::new("Alex", 30, "EE");
//! alex.validate()?;
//!
//! let patch = UpdatePatch { dept: Patch::Value("ME".into()), ..Default::default() };
//! alex.apply(&patch)?;
//! assert_eq!(alex.dept, "ME");
//! ```

mod id;
mod patch;
mod record;

use std::fmt;

pub use id::StudentId;
pub use patch::Patch;
pub use record::{StudentRecord, UpdatePatch};

/// A student value that failed a type, range, or non-empty check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ValidationError {}
