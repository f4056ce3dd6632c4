use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A student key. Always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StudentId(u32);

impl StudentId {
    /// The lowest valid ID.
    pub const MIN: StudentId = StudentId(1);

    /// Build an ID, rejecting `0`.
    pub fn new(raw: u32) -> Result<Self, ValidationError> {
        if raw == 0 {
            return Err(ValidationError::new(
                "student_id must be greater than or equal to 1",
            ));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for StudentId {
    type Error = ValidationError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<StudentId> for u32 {
    fn from(id: StudentId) -> Self {
        id.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
