use super::*;

#[test]
fn memory_storage_round_trips_and_removes() {
    let store = MemoryStorage::with_items([("auth_token", "abc")]);
    assert_eq!(store.get_item("auth_token").unwrap().as_deref(), Some("abc"));

    store.set_item("user_info", "{}").unwrap();
    assert!(store.contains("user_info"));

    store.remove_item("auth_token").unwrap();
    assert_eq!(store.get_item("auth_token").unwrap(), None);
}

#[test]
fn removing_missing_key_is_ok() {
    let store = MemoryStorage::new();
    assert!(store.remove_item("nope").is_ok());
}
