use crate::tests::sample_auth;
use crate::{
    Client, FileSessionStore, MemorySessionStore, NullSessionStore, SessionKey, SessionStore,
    UserInfo,
};

use std::sync::Arc;

use googletest::assert_that;
use googletest::prelude::{anything, none, ok};
use tempfile::TempDir;

fn memory_client() -> (Client, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    (Client::new(store.clone()), store)
}

#[test]
fn given_auth_response_when_save_auth_then_four_keys_written() {
    let (client, store) = memory_client();

    client.save_auth(&sample_auth()).unwrap();

    assert_eq!(store.get(SessionKey::AuthToken).as_deref(), Some("jwt"));
    assert_eq!(store.get(SessionKey::UserId).as_deref(), Some("10"));
    assert_eq!(store.get(SessionKey::Username).as_deref(), Some("user"));
    assert_eq!(store.get(SessionKey::UserRole).as_deref(), Some("USER"));
}

#[test]
fn given_saved_auth_then_authenticated_with_stringified_id() {
    let (client, _store) = memory_client();

    client.save_auth(&sample_auth()).unwrap();

    assert!(client.is_authenticated());
    assert_eq!(
        client.get_user_info(),
        Some(UserInfo {
            id: Some("10".to_string()),
            username: Some("user".to_string()),
            role: Some("USER".to_string()),
        })
    );
}

#[test]
fn given_saved_auth_when_clear_auth_then_unauthenticated_and_fields_empty() {
    let (client, store) = memory_client();
    client.save_auth(&sample_auth()).unwrap();

    client.clear_auth().unwrap();

    assert!(!client.is_authenticated());
    assert!(client.get_user_info().unwrap().is_empty());
    for key in SessionKey::ALL {
        assert_that!(store.get(key), none());
    }
}

#[test]
fn given_empty_token_then_not_authenticated() {
    let (client, store) = memory_client();
    store.set(SessionKey::AuthToken, "").unwrap();

    assert!(!client.is_authenticated());
}

#[test]
fn given_partial_session_then_user_info_has_only_present_fields() {
    let (client, store) = memory_client();
    store.set(SessionKey::Username, "mandor").unwrap();

    let info = client.get_user_info().unwrap();

    assert!(!client.is_authenticated());
    assert_eq!(info.username.as_deref(), Some("mandor"));
    assert_that!(info.id, none());
    assert_that!(info.role, none());
}

#[test]
fn given_null_store_then_user_info_none_and_writes_are_noops() {
    let client = Client::new(Arc::new(NullSessionStore));

    assert_that!(client.get_user_info(), none());
    assert_that!(client.save_auth(&sample_auth()), ok(anything()));
    assert!(!client.is_authenticated());
    assert_that!(client.clear_auth(), ok(anything()));
    assert!(!client.is_authenticated());
}

#[test]
fn given_null_store_save_then_other_store_on_same_process_unaffected() {
    let null_client = Client::new(Arc::new(NullSessionStore));
    null_client.save_auth(&sample_auth()).unwrap();

    let (client, _store) = memory_client();

    assert!(!client.is_authenticated());
    assert!(client.get_user_info().unwrap().is_empty());
}

#[test]
fn given_file_store_when_save_auth_then_new_client_sees_session() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    Client::new(Arc::new(FileSessionStore::new(&path)))
        .save_auth(&sample_auth())
        .unwrap();
    let reopened = Client::new(Arc::new(FileSessionStore::new(&path)));

    assert!(reopened.is_authenticated());
    assert_eq!(
        reopened.get_user_info().and_then(|info| info.role).as_deref(),
        Some("USER")
    );
}
