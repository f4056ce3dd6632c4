//! Store-level properties over the public API.

use std::sync::Arc;
use std::thread;

use student_registry::{
    InMemoryStudentStore, Patch, Resolution, StoreError, StudentRecord, StudentStore,
    UpdatePatch,
};

use crate::support::{alex, id, sachin};

#[test]
fn get_by_id_returns_exactly_the_stored_record() {
    let store = InMemoryStudentStore::seeded();
    store.create(id(2), alex()).unwrap();

    for raw in 1..100 {
        match raw {
            1 => assert_eq!(store.get_by_id(raw).unwrap(), sachin()),
            2 => assert_eq!(store.get_by_id(raw).unwrap(), alex()),
            _ => assert_eq!(store.get_by_id(raw), Err(StoreError::NotFound(id(raw)))),
        }
    }
}

#[test]
fn failed_create_is_idempotent() {
    let store = InMemoryStudentStore::seeded();
    store.create(id(2), alex()).unwrap();

    let intruder = StudentRecord::new("Mallory", 44, "LAW");
    for _ in 0..3 {
        assert_eq!(
            store.create(id(2), intruder.clone()),
            Err(StoreError::AlreadyExists(id(2)))
        );
    }
    assert_eq!(store.get_by_id(2).unwrap(), alex());
    assert_eq!(store.get_all().unwrap().len(), 2);
}

#[test]
fn update_only_age_keeps_other_fields() {
    let store = InMemoryStudentStore::seeded();
    let patch = UpdatePatch {
        age: Patch::Value(31),
        ..Default::default()
    };

    let updated = store.update(id(1), &patch).unwrap();
    assert_eq!(updated.name, "Sachin");
    assert_eq!(updated.dept, "CSE");
    assert_eq!(updated.age, 31);
}

#[test]
fn combined_lookup_tags_resolution() {
    let store = InMemoryStudentStore::seeded();

    match store.get_by_id_and_name(id(1), None).unwrap() {
        Resolution::ById(record) => assert_eq!(record, sachin()),
        other => panic!("expected id-only resolution, got {:?}", other),
    }

    let err = store
        .get_by_id_and_name(id(1), Some("Someone Else"))
        .unwrap_err();
    assert!(matches!(err, StoreError::NameMismatch { .. }));
    assert_ne!(err, StoreError::NotFound(id(1)));
}

#[test]
fn concurrent_creates_on_one_id_admit_a_single_winner() {
    let store = Arc::new(InMemoryStudentStore::new());

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .create(id(5), StudentRecord::new(format!("Student {}", n), 20 + n, "EE"))
                    .is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(store.get_all().unwrap().len(), 1);
}

#[test]
fn roster_serializes_in_insertion_order() {
    let store = InMemoryStudentStore::seeded();
    store.create(id(12), alex()).unwrap();
    store.create(id(3), StudentRecord::new("Priya", 22, "ME")).unwrap();

    let json = serde_json::to_string(&store.get_all().unwrap()).unwrap();
    let first = json.find("\"1\"").unwrap();
    let second = json.find("\"12\"").unwrap();
    let third = json.find("\"3\"").unwrap();
    assert!(first < second && second < third, "unexpected order: {}", json);
}
