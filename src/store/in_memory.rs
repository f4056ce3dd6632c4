//! InMemoryStudentStore - HashMap-backed student store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use super::{Resolution, Roster, StoreError, StudentStore, MAX_LOOKUP_ID, MIN_LOOKUP_ID};
use crate::student::{StudentId, StudentRecord, UpdatePatch};

/// Mapping plus the insertion order used for listing and name search.
#[derive(Default)]
struct Students {
    records: HashMap<StudentId, StudentRecord>,
    order: Vec<StudentId>,
}

impl Students {
    fn insert(&mut self, id: StudentId, record: StudentRecord) {
        self.records.insert(id, record);
        self.order.push(id);
    }

    fn find_by_name(&self, name: &str) -> Option<&StudentRecord> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .find(|record| record.name == name)
    }
}

/// In-memory student store behind a single mutex.
///
/// Clone-friendly via Arc; clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryStudentStore {
    storage: Arc<Mutex<Students>>,
}

impl InMemoryStudentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the startup record
    /// `1 => { "Sachin", 26, "CSE" }`.
    pub fn seeded() -> Self {
        let mut students = Students::default();
        students.insert(StudentId::MIN, StudentRecord::new("Sachin", 26, "CSE"));
        Self {
            storage: Arc::new(Mutex::new(students)),
        }
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, Students>, StoreError> {
        self.storage
            .lock()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }
}

impl StudentStore for InMemoryStudentStore {
    fn get_all(&self) -> Result<Roster, StoreError> {
        let students = self.lock("get_all")?;
        let entries = students
            .order
            .iter()
            .filter_map(|id| students.records.get(id).map(|record| (*id, record.clone())))
            .collect();
        Ok(Roster::new(entries))
    }

    fn get_by_id(&self, id: u32) -> Result<StudentRecord, StoreError> {
        if !(MIN_LOOKUP_ID..MAX_LOOKUP_ID).contains(&id) {
            return Err(StoreError::OutOfRange {
                id,
                min: MIN_LOOKUP_ID,
                max: MAX_LOOKUP_ID,
            });
        }
        let id = StudentId::new(id)?;

        let students = self.lock("get_by_id")?;
        let found = students.records.get(&id).cloned();
        debug!(student_id = %id, found = found.is_some(), "lookup by id");
        found.ok_or(StoreError::NotFound(id))
    }

    fn get_by_name(&self, name: Option<&str>) -> Result<StudentRecord, StoreError> {
        let Some(name) = name else {
            return Err(StoreError::NameNotFound(None));
        };

        let students = self.lock("get_by_name")?;
        let found = students.find_by_name(name).cloned();
        debug!(name = %name, found = found.is_some(), "lookup by name");
        found.ok_or_else(|| StoreError::NameNotFound(Some(name.to_string())))
    }

    fn get_by_id_and_name(
        &self,
        id: StudentId,
        name: Option<&str>,
    ) -> Result<Resolution, StoreError> {
        let students = self.lock("get_by_id_and_name")?;
        let record = students
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))?;

        match name {
            None => Ok(Resolution::ById(record)),
            Some(name) if record.name == name => Ok(Resolution::ByIdAndName(record)),
            Some(name) => Err(StoreError::NameMismatch {
                id,
                name: name.to_string(),
            }),
        }
    }

    fn create(&self, id: StudentId, record: StudentRecord) -> Result<StudentRecord, StoreError> {
        record.validate()?;

        let mut students = self.lock("create")?;
        if students.records.contains_key(&id) {
            return Err(StoreError::AlreadyExists(id));
        }
        students.insert(id, record.clone());
        info!(student_id = %id, name = %record.name, "student created");
        Ok(record)
    }

    fn update(&self, id: StudentId, patch: &UpdatePatch) -> Result<StudentRecord, StoreError> {
        let mut students = self.lock("update")?;
        let record = students
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        record.apply(patch)?;
        info!(student_id = %id, "student updated");
        Ok(record.clone())
    }

    fn delete(&self, id: StudentId) -> Result<(), StoreError> {
        let mut students = self.lock("delete")?;
        if students.records.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        students.order.retain(|key| *key != id);
        info!(student_id = %id, "student deleted");
        Ok(())
    }
}
