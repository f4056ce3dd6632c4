use serde::{Deserialize, Serialize};

use super::{Patch, ValidationError};

/// A stored student. All three fields are mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub age: u32,
    pub dept: String,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, age: u32, dept: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            dept: dept.into(),
        }
    }

    /// Check the non-empty and positive-age rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name)?;
        check_age(self.age)?;
        check_text("dept", &self.dept)
    }

    /// Merge the present fields of `patch` into this record.
    ///
    /// The whole patch is checked before any field is written, so a rejected
    /// patch leaves the record untouched.
    pub fn apply(&mut self, patch: &UpdatePatch) -> Result<(), ValidationError> {
        patch.validate()?;

        if let Patch::Value(name) = &patch.name {
            self.name = name.clone();
        }
        if let Patch::Value(age) = patch.age {
            self.age = age;
        }
        if let Patch::Value(dept) = &patch.dept {
            self.dept = dept.clone();
        }
        Ok(())
    }
}

/// A sparse update. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePatch {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub age: Patch<u32>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub dept: Patch<String>,
}

impl UpdatePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_absent() && self.age.is_absent() && self.dept.is_absent()
    }

    /// Reject explicit nulls (a record never holds a null field) and check
    /// supplied values with the same rules as a full record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Patch::Null => return Err(null_field("name")),
            Patch::Value(name) => check_text("name", name)?,
            Patch::Absent => {}
        }
        match self.age {
            Patch::Null => return Err(null_field("age")),
            Patch::Value(age) => check_age(age)?,
            Patch::Absent => {}
        }
        match &self.dept {
            Patch::Null => return Err(null_field("dept")),
            Patch::Value(dept) => check_text("dept", dept)?,
            Patch::Absent => {}
        }
        Ok(())
    }
}

fn check_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn check_age(age: u32) -> Result<(), ValidationError> {
    if age == 0 {
        return Err(ValidationError::new("age must be greater than 0"));
    }
    Ok(())
}

fn null_field(field: &str) -> ValidationError {
    ValidationError::new(format!("{} cannot be null", field))
}
