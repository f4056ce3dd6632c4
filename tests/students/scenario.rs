//! End-to-end walk through the store operations.

use student_registry::{InMemoryStudentStore, Patch, StoreError, StudentStore, UpdatePatch};

use crate::support::{alex, id};

#[test]
fn seed_create_find_update_delete() {
    let store = InMemoryStudentStore::seeded();

    store.create(id(2), alex()).unwrap();
    assert_eq!(store.get_all().unwrap().len(), 2);

    assert_eq!(store.get_by_name(Some("Alex")).unwrap(), alex());

    let patch = UpdatePatch {
        dept: Patch::Value("ME".into()),
        ..Default::default()
    };
    let updated = store.update(id(2), &patch).unwrap();
    assert_eq!(updated.dept, "ME");
    assert_eq!(updated.name, "Alex");
    assert_eq!(updated.age, 30);

    store.delete(id(1)).unwrap();
    let all = store.get_all().unwrap();
    assert_eq!(all.ids(), vec![id(2)]);
    assert_eq!(all.get(id(2)), Some(&updated));

    assert_eq!(store.delete(id(1)), Err(StoreError::NotFound(id(1))));
    assert_eq!(store.get_by_id(1), Err(StoreError::NotFound(id(1))));
}
