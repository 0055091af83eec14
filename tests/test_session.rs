//! Session store tests: token persistence, wishlist mirror, corrupt files.

use std::fs;

use jewel_storefront_sdk::{SessionStore, StorefrontSdk};

#[test]
fn empty_dir_opens_empty_session() {
    let tmp = tempfile::tempdir().unwrap();
    let store = SessionStore::open(Some(tmp.path().to_path_buf())).unwrap();
    assert!(store.token().is_none());
    assert!(store.wishlist().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn token_and_wishlist_persist_across_opens() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let mut store = SessionStore::open(Some(tmp.path().to_path_buf())).unwrap();
        store.set_token(Some("tok-123".to_string())).unwrap();
        store.add_to_wishlist("p1").unwrap();
        store.add_to_wishlist("p2").unwrap();
        store.add_to_wishlist("p1").unwrap();
    }
    let mut store = SessionStore::open(Some(tmp.path().to_path_buf())).unwrap();
    assert_eq!(store.token(), Some("tok-123"));
    assert_eq!(store.wishlist(), ["p1".to_string(), "p2".to_string()]);

    store.remove_from_wishlist("p1").unwrap();
    let store = SessionStore::open(Some(tmp.path().to_path_buf())).unwrap();
    assert_eq!(store.wishlist(), ["p2".to_string()]);
    assert!(store.is_wishlisted("p2"));
    assert_eq!(store.data().token.as_deref(), Some("tok-123"));
    assert_eq!(store.data().wishlist, vec!["p2".to_string()]);
}

#[test]
fn corrupt_session_file_is_removed() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("session.json");
    fs::write(&path, "{\"token\": tru").unwrap();

    let store = SessionStore::open(Some(tmp.path().to_path_buf())).unwrap();
    assert!(store.token().is_none());
    assert!(!path.exists());
}

#[test]
fn clear_removes_file() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open(Some(tmp.path().to_path_buf())).unwrap();
    store.set_token(Some("tok".to_string())).unwrap();
    assert!(store.path().exists());

    store.clear().unwrap();
    assert!(store.token().is_none());
    assert!(!store.path().exists());
}

#[test]
fn sdk_picks_up_stored_token() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let mut store = SessionStore::open(Some(tmp.path().to_path_buf())).unwrap();
        store.set_token(Some("stored".to_string())).unwrap();
    }
    let sdk = StorefrontSdk::builder()
        .session_dir(tmp.path())
        .build()
        .unwrap();
    assert!(sdk.is_signed_in());
    assert_eq!(sdk.client().token().as_deref(), Some("stored"));

    let sdk = StorefrontSdk::builder()
        .session_dir(tmp.path())
        .token("explicit")
        .build()
        .unwrap();
    assert_eq!(sdk.client().token().as_deref(), Some("explicit"));
}

#[test]
fn sign_in_and_out_update_store_and_client() {
    let tmp = tempfile::tempdir().unwrap();
    let sdk = StorefrontSdk::builder()
        .session_dir(tmp.path())
        .build()
        .unwrap();
    assert!(!sdk.is_signed_in());

    sdk.sign_in("fresh").unwrap();
    assert!(sdk.is_signed_in());
    let reopened = SessionStore::open(Some(tmp.path().to_path_buf())).unwrap();
    assert_eq!(reopened.token(), Some("fresh"));

    sdk.sign_out().unwrap();
    assert!(!sdk.is_signed_in());
    assert!(sdk.wishlist_mirror().is_empty());
    assert!(!tmp.path().join("session.json").exists());
}
