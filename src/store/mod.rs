//! Student store - the record access layer.
//!
//! `StudentStore` is the CRUD abstraction handlers talk to. It owns the
//! ID-to-record mapping and the lookup rules:
//!
//! - lookup by ID, bounded to `1 <= id < 100`
//! - lookup by name, first match in insertion order
//! - combined ID + name lookup that tells "ID not found" apart from
//!   "name does not match"
//! - create without overwrite, sparse update, delete
//!
//! ## Example
//!
//! ```ignore
//! use student_registry::{InMemoryStudentStore, StudentStore, StudentId, StudentRecord};
//!
//! let store = InMemoryStudentStore::seeded();
//! let alex = StudentRecord::new("Alex", 30, "EE");
//! store.create(StudentId::new(2)?, alex.clone())?;
//! assert_eq!(store.get_by_name(Some("Alex"))?, alex);
//! ```

mod error;
mod in_memory;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::student::{StudentId, StudentRecord, UpdatePatch};

pub use error::StoreError;
pub use in_memory::InMemoryStudentStore;

/// Smallest ID accepted by [`StudentStore::get_by_id`].
pub const MIN_LOOKUP_ID: u32 = 1;
/// Exclusive upper bound for [`StudentStore::get_by_id`].
pub const MAX_LOOKUP_ID: u32 = 100;

/// Abstract CRUD storage for student records.
///
/// Implementations must give every operation exclusive access to the
/// mapping; none of them is treated as read-only.
pub trait StudentStore: Send + Sync {
    /// Every record, in insertion order.
    fn get_all(&self) -> Result<Roster, StoreError>;

    /// The record stored under `id`.
    ///
    /// `id` must lie in `[MIN_LOOKUP_ID, MAX_LOOKUP_ID)`; this is checked
    /// before the lookup and reported as [`StoreError::OutOfRange`]. It takes
    /// the raw `u32` rather than a `StudentId` so that `0` falls under the
    /// same range check as `100` and above.
    fn get_by_id(&self, id: u32) -> Result<StudentRecord, StoreError>;

    /// First record (insertion order) whose name equals `name` exactly.
    fn get_by_name(&self, name: Option<&str>) -> Result<StudentRecord, StoreError>;

    /// Look up by ID, then optionally confirm the name.
    fn get_by_id_and_name(
        &self,
        id: StudentId,
        name: Option<&str>,
    ) -> Result<Resolution, StoreError>;

    /// Insert a new record. Never overwrites.
    fn create(&self, id: StudentId, record: StudentRecord) -> Result<StudentRecord, StoreError>;

    /// Merge `patch` into an existing record and return the result.
    fn update(&self, id: StudentId, patch: &UpdatePatch) -> Result<StudentRecord, StoreError>;

    /// Remove an existing record.
    fn delete(&self, id: StudentId) -> Result<(), StoreError>;
}

/// How a combined ID + name lookup was satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No name was supplied; the ID alone picked the record.
    ById(StudentRecord),
    /// A name was supplied and matched the record under the ID.
    ByIdAndName(StudentRecord),
}

impl Resolution {
    pub fn record(&self) -> &StudentRecord {
        match self {
            Resolution::ById(record) | Resolution::ByIdAndName(record) => record,
        }
    }

    pub fn into_record(self) -> StudentRecord {
        match self {
            Resolution::ById(record) | Resolution::ByIdAndName(record) => record,
        }
    }
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Resolution::ById(record) => map.serialize_entry("name_not_given", record)?,
            Resolution::ByIdAndName(record) => map.serialize_entry("name_given", record)?,
        }
        map.end()
    }
}

/// A snapshot of the whole store in insertion order.
///
/// Serialises as a JSON object keyed by student ID, keeping that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(StudentId, StudentRecord)>,
}

impl Roster {
    pub(crate) fn new(entries: Vec<(StudentId, StudentRecord)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&StudentRecord> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, record)| record)
    }

    pub fn ids(&self) -> Vec<StudentId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(StudentId, StudentRecord)> {
        self.entries.iter()
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, record) in &self.entries {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}
