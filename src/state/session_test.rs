use super::*;
use crate::util::storage::MemoryStorage;

fn keys() -> StorageKeys {
    StorageKeys::default()
}

#[test]
fn read_session_with_token_and_full_name_is_logged_in() {
    let store = MemoryStorage::with_items([
        ("auth_token", "abc"),
        ("user_info", r#"{"full_name":"Jane Doe","first_name":"Jane"}"#),
    ]);
    let session = read_session(&store, &keys());
    assert!(session.is_logged_in());
    assert_eq!(session.display_name(), Some("Jane Doe"));
    assert_eq!(session.greeting_name(), Some("Jane"));
}

#[test]
fn malformed_user_info_degrades_to_empty_record() {
    for raw in ["not json", "null", "[1,2]", "\"Jane\"", "42"] {
        let store = MemoryStorage::with_items([("auth_token", "abc"), ("user_info", raw)]);
        let session = read_session(&store, &keys());
        assert_eq!(session.user, UserInfo::default(), "raw = {raw}");
        assert!(!session.is_logged_in());
        assert!(session.has_token());
    }
}

#[test]
fn non_string_name_fields_are_treated_as_absent() {
    let user = UserInfo::parse(r#"{"full_name": 7, "first_name": null, "email": "j@x.io"}"#);
    assert_eq!(user.full_name, None);
    assert_eq!(user.first_name, None);
    assert_eq!(user.extra.get("email"), Some(&serde_json::json!("j@x.io")));
}

#[test]
fn empty_token_or_empty_full_name_is_not_logged_in() {
    let cases = [
        Session { token: Some(String::new()), user: UserInfo::parse(r#"{"full_name":"Jane"}"#) },
        Session { token: Some("abc".to_owned()), user: UserInfo::parse(r#"{"full_name":""}"#) },
        Session { token: None, user: UserInfo::parse(r#"{"full_name":"Jane"}"#) },
        Session::default(),
    ];
    for session in cases {
        assert!(!session.is_logged_in(), "{session:?}");
        assert_eq!(session.greeting_name(), None);
    }
}

#[test]
fn greeting_falls_back_to_first_word_of_full_name() {
    let session = Session {
        token: Some("abc".to_owned()),
        user: UserInfo::parse(r#"{"full_name":"Jane Doe","first_name":"  "}"#),
    };
    assert_eq!(session.greeting_name(), Some("Jane"));
}

#[test]
fn write_then_clear_session() {
    let store = MemoryStorage::new();
    let session = Session {
        token: Some("abc".to_owned()),
        user: UserInfo::parse(r#"{"full_name":"Jane Doe","first_name":"Jane","email":"j@x.io"}"#),
    };
    write_session(&store, &keys(), &session).unwrap();
    assert_eq!(read_session(&store, &keys()), session);

    clear_session(&store, &keys()).unwrap();
    assert!(!store.contains("auth_token"));
    assert!(!store.contains("user_info"));
    assert_eq!(read_session(&store, &keys()), Session::default());
}

#[test]
fn custom_keys_are_honored() {
    let keys = StorageKeys { token_key: "authToken".to_owned(), user_info_key: "userInfo".to_owned() };
    let store = MemoryStorage::with_items([("authToken", "t"), ("userInfo", r#"{"full_name":"Ann"}"#)]);
    assert_eq!(read_session(&store, &keys).display_name(), Some("Ann"));
}
