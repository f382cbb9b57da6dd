use super::*;
use crate::util::storage::MemoryStorage;

fn in_owner<T>(f: impl FnOnce() -> T) -> T {
    Owner::new().with(f)
}

/// Storage that serves reads from `inner` but refuses every write.
#[derive(Clone, Default)]
struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl KeyValueStore for ReadOnlyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected { op: "set", key: key.to_owned() })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected { op: "remove", key: key.to_owned() })
    }
}

fn stored(storage: &MemoryStorage, key: &str) -> Option<String> {
    storage.get(key).unwrap()
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn open_empty_storage_is_signed_out() {
    let store = SessionStore::open(MemoryStorage::new());
    assert!(store.is_restored());
    assert!(!store.is_authenticated());
    assert_eq!(store.current_user(), None);
}

#[test]
fn pending_store_is_signed_out_and_unrestored() {
    let storage = MemoryStorage::new();
    storage.set(AUTH_KEY, "true").unwrap();
    let store = SessionStore::pending(storage);
    assert!(!store.is_restored());
    assert!(!store.is_authenticated());
}

#[test]
fn restore_reads_persisted_session() {
    let storage = MemoryStorage::new();
    storage.set(AUTH_KEY, "true").unwrap();
    storage.set(USER_KEY, "carol").unwrap();
    let mut store = SessionStore::pending(storage);
    store.restore();
    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), Some("carol"));
}

#[test]
fn non_true_flag_reads_as_signed_out() {
    for flag in ["false", "TRUE", "1", "yes", ""] {
        let storage = MemoryStorage::new();
        storage.set(AUTH_KEY, flag).unwrap();
        storage.set(USER_KEY, "mallory").unwrap();
        let store = SessionStore::open(storage);
        assert!(!store.is_authenticated(), "flag {flag:?}");
        assert_eq!(store.current_user(), None, "flag {flag:?}");
    }
}

#[test]
fn flag_without_user_is_authenticated_without_name() {
    let storage = MemoryStorage::new();
    storage.set(AUTH_KEY, "true").unwrap();
    let store = SessionStore::open(storage);
    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), None);
}

// =============================================================
// Login / logout persistence
// =============================================================

#[test]
fn login_survives_reload() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    store.login("alice").unwrap();
    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), Some("alice"));

    let reloaded = SessionStore::open(storage);
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.current_user(), Some("alice"));
}

#[test]
fn login_writes_both_keys() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    store.login("alice").unwrap();
    assert_eq!(stored(&storage, AUTH_KEY).as_deref(), Some("true"));
    assert_eq!(stored(&storage, USER_KEY).as_deref(), Some("alice"));
    assert_eq!(storage.snapshot().len(), 2);
}

#[test]
fn login_accepts_any_username() {
    let mut store = SessionStore::open(MemoryStorage::new());
    store.login("  Zoë ✦ admin  ").unwrap();
    assert_eq!(store.current_user(), Some("  Zoë ✦ admin  "));
}

#[test]
fn login_with_empty_name_keeps_no_user_key() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    store.login("").unwrap();
    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), None);
    assert_eq!(stored(&storage, USER_KEY), None);
}

#[test]
fn logout_clears_user_and_flag() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    store.login("alice").unwrap();
    store.logout().unwrap();

    assert!(!store.is_authenticated());
    assert_eq!(store.current_user(), None);
    assert_eq!(stored(&storage, AUTH_KEY).as_deref(), Some("false"));
    assert_eq!(stored(&storage, USER_KEY), None);

    let reloaded = SessionStore::open(storage);
    assert!(!reloaded.is_authenticated());
}

#[test]
fn relogin_replaces_previous_user() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone());
    store.login("alice").unwrap();
    store.logout().unwrap();
    store.login("bob").unwrap();
    assert_eq!(SessionStore::open(storage).current_user(), Some("bob"));
}

// =============================================================
// Storage failures
// =============================================================

#[test]
fn failed_login_write_leaves_state_unchanged() {
    let mut store = SessionStore::open(ReadOnlyStorage::default());
    let err = store.login("alice").unwrap_err();
    assert_eq!(err, StorageError::Rejected { op: "set", key: USER_KEY.to_owned() });
    assert!(!store.is_authenticated());
    assert_eq!(store.current_user(), None);
}

#[test]
fn failed_logout_write_keeps_user_signed_in() {
    let storage = ReadOnlyStorage::default();
    storage.inner.set(AUTH_KEY, "true").unwrap();
    storage.inner.set(USER_KEY, "alice").unwrap();
    let mut store = SessionStore::open(storage);
    assert!(store.logout().is_err());
    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), Some("alice"));
}

// =============================================================
// Reactive handle
// =============================================================

#[test]
fn handle_is_pending_until_restored() {
    in_owner(|| {
        let storage = MemoryStorage::new();
        storage.set(AUTH_KEY, "true").unwrap();
        storage.set(USER_KEY, "carol").unwrap();
        let session = Session::with_storage(storage);

        assert!(!session.is_restored());
        assert_eq!(session.guard(), GuardDecision::Pending);

        session.restore();
        assert!(session.is_restored());
        assert_eq!(session.guard(), GuardDecision::Render);
        assert_eq!(session.current_user().as_deref(), Some("carol"));
    });
}

#[test]
fn handle_restores_empty_storage_as_redirect() {
    in_owner(|| {
        let session = Session::with_storage(MemoryStorage::new());
        session.restore();
        assert!(!session.is_authenticated());
        assert_eq!(session.guard(), GuardDecision::Redirect);
    });
}

#[test]
fn handle_login_logout_persist_and_flip_guard() {
    in_owner(|| {
        let storage = MemoryStorage::new();
        let session = Session::with_storage(storage.clone());
        session.restore();

        session.login("alice").unwrap();
        assert_eq!(session.guard(), GuardDecision::Render);
        assert_eq!(stored(&storage, USER_KEY).as_deref(), Some("alice"));

        session.logout().unwrap();
        assert_eq!(session.guard(), GuardDecision::Redirect);
        assert_eq!(session.current_user(), None);
        assert_eq!(stored(&storage, AUTH_KEY).as_deref(), Some("false"));
    });
}

#[test]
fn handle_copies_share_one_session() {
    in_owner(|| {
        let session = Session::with_storage(MemoryStorage::new());
        let header_copy = session;
        session.login("alice").unwrap();
        assert!(header_copy.is_authenticated());
        assert_eq!(header_copy.current_user().as_deref(), Some("alice"));
    });
}

#[test]
fn handle_reports_failed_write() {
    in_owner(|| {
        let session = Session::with_storage(ReadOnlyStorage::default());
        session.restore();
        assert!(session.login("alice").is_err());
        assert!(!session.is_authenticated());
    });
}

#[test]
fn disposed_handle_errors_instead_of_succeeding() {
    let storage = MemoryStorage::new();
    let session = in_owner(|| Session::with_storage(storage.clone()));
    session.store.dispose();

    assert_eq!(session.login("alice"), Err(StorageError::Unavailable));
    assert_eq!(session.logout(), Err(StorageError::Unavailable));
    assert!(storage.snapshot().is_empty());
}

// =============================================================
// Context accessor
// =============================================================

#[test]
#[should_panic(expected = "use_session must be called within a SessionProvider")]
fn use_session_without_provider_panics() {
    in_owner(|| {
        let _ = use_session();
    });
}

#[test]
fn use_session_returns_provided_handle() {
    in_owner(|| {
        let session = Session::new();
        provide_context(session);
        let found = use_session();
        assert!(!found.is_restored());
        assert_eq!(found.guard(), GuardDecision::Pending);
    });
}
