// comanda-client/tests/session_store.rs
// Session persistence tests.

use comanda_client::{Session, SessionStore};
use shared::client::{LoginResponse, UserInfo};
use shared::Role;
use tempfile::TempDir;

fn login_response(role: Option<&str>, nested: Option<&str>) -> LoginResponse {
    LoginResponse {
        token: "jwt-token".to_string(),
        role: role.map(str::to_string),
        user: nested.map(|r| UserInfo {
            id: "1".to_string(),
            username: "maria".to_string(),
            role: r.to_string(),
        }),
    }
}

#[test]
fn save_load_clear_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::new(temp_dir.path());

    assert!(store.load().unwrap().is_none());

    let session = Session::from_login(&login_response(Some("cashier"), None), "maria@example.com")
        .unwrap();
    store.save(&session).unwrap();

    let loaded = store.load().unwrap().expect("session should persist");
    assert_eq!(loaded.token, "jwt-token");
    assert_eq!(loaded.role, Role::Cashier);
    assert_eq!(loaded.email, "maria@example.com");

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
    // Clearing twice is fine
    store.clear().unwrap();
}

#[test]
fn unparsable_session_file_is_discarded() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::new(temp_dir.path());

    std::fs::write(store.file_path(), "{ not json").unwrap();

    assert!(store.load().unwrap().is_none());
    // The broken file was removed so the next load is clean
    assert!(!store.file_path().exists());
}

#[test]
fn session_resolves_role_from_either_location() {
    let top = Session::from_login(&login_response(Some("admin"), None), "a@x").unwrap();
    assert_eq!(top.role, Role::Admin);

    let nested = Session::from_login(&login_response(None, Some("kitchen")), "k@x").unwrap();
    assert_eq!(nested.role, Role::Kitchen);

    assert!(Session::from_login(&login_response(None, None), "n@x").is_err());
    assert!(Session::from_login(&login_response(Some("waiter"), None), "w@x").is_err());
}
