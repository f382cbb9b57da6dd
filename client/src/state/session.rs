//! Sign-in session for the admin user.
//!
//! DESIGN
//! ======
//! `SessionStore` is plain data over a [`KeyValueStore`] so it can be driven
//! without a reactive runtime. [`Session`] wraps it in a signal and is the
//! handle the UI passes around. Storage writes happen inside `login` and
//! `logout` before the in-memory state changes, so the two never disagree.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::auth::{GuardDecision, guard_decision};
use crate::util::storage::{BrowserStorage, KeyValueStore, StorageError};

/// Storage key holding `"true"` or `"false"`.
pub const AUTH_KEY: &str = "isAuthenticated";
/// Storage key holding the username; absent when signed out.
pub const USER_KEY: &str = "user";

/// Authentication flag plus username.
///
/// `user` is only ever `Some` while `authenticated` is true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<String>,
}

impl SessionState {
    /// Signed-in state for `username`. An empty name is kept as "no user".
    #[must_use]
    pub fn signed_in(username: &str) -> Self {
        Self {
            authenticated: true,
            user: Some(username.to_owned()).filter(|u| !u.is_empty()),
        }
    }

    /// Read both keys. Anything other than `"true"` under [`AUTH_KEY`] is
    /// signed out, and a stored user without the flag is ignored.
    fn read_from<S: KeyValueStore>(storage: &S) -> Self {
        let authenticated = match storage.get(AUTH_KEY) {
            Ok(flag) => flag.as_deref() == Some("true"),
            Err(e) => {
                leptos::logging::warn!("session restore: {e}");
                false
            }
        };
        if !authenticated {
            return Self::default();
        }
        let user = match storage.get(USER_KEY) {
            Ok(user) => user.filter(|u| !u.is_empty()),
            Err(e) => {
                leptos::logging::warn!("session restore: {e}");
                None
            }
        };
        Self { authenticated, user }
    }

    /// Write both keys.
    ///
    /// Signing in writes the user before the flag and signing out clears the
    /// flag before the user, so a half-finished write still reads as signed out.
    fn write_to<S: KeyValueStore>(&self, storage: &S) -> Result<(), StorageError> {
        if self.authenticated {
            self.write_user(storage)?;
            storage.set(AUTH_KEY, "true")
        } else {
            storage.set(AUTH_KEY, "false")?;
            self.write_user(storage)
        }
    }

    fn write_user<S: KeyValueStore>(&self, storage: &S) -> Result<(), StorageError> {
        match &self.user {
            Some(user) => storage.set(USER_KEY, user),
            None => storage.remove(USER_KEY),
        }
    }
}

/// Session state bound to its storage backend.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    state: SessionState,
    restored: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Store that has not read storage yet and reports signed out.
    ///
    /// Server rendering and the first hydration pass use this so both sides
    /// produce the same markup; the browser calls [`restore`](Self::restore)
    /// right after hydrating.
    pub fn pending(storage: S) -> Self {
        Self { storage, state: SessionState::default(), restored: false }
    }

    /// Store initialized from whatever `storage` currently holds.
    pub fn open(storage: S) -> Self {
        let mut store = Self::pending(storage);
        store.restore();
        store
    }

    /// Reload state from storage.
    pub fn restore(&mut self) {
        self.state = SessionState::read_from(&self.storage);
        self.restored = true;
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.authenticated
    }

    pub fn current_user(&self) -> Option<&str> {
        self.state.user.as_deref()
    }

    /// Sign in as `username`. Any string is accepted.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; the in-memory state is then unchanged.
    pub fn login(&mut self, username: &str) -> Result<(), StorageError> {
        self.commit(SessionState::signed_in(username))
    }

    /// Sign out, clearing both the flag and the username.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; the in-memory state is then unchanged.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.commit(SessionState::default())
    }

    fn commit(&mut self, next: SessionState) -> Result<(), StorageError> {
        next.write_to(&self.storage)?;
        self.state = next;
        self.restored = true;
        Ok(())
    }
}

/// Reactive handle to the session.
///
/// Created once by the root component and handed to whatever needs it.
/// `Copy`, so passing it into closures and props costs nothing. The app uses
/// the browser backend; tests drive it over [`MemoryStorage`](crate::util::storage::MemoryStorage).
pub struct Session<S = BrowserStorage> {
    store: RwSignal<SessionStore<S>>,
}

impl<S> Clone for Session<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Session<S> {}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(BrowserStorage)
    }
}

impl<S> Session<S>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    /// Pending session over `storage`; nothing is read until [`restore`](Self::restore).
    #[must_use]
    pub fn with_storage(storage: S) -> Self {
        Self { store: RwSignal::new(SessionStore::pending(storage)) }
    }

    /// Load the persisted session. Call once the browser is available.
    pub fn restore(self) {
        self.store.update(SessionStore::restore);
    }

    pub fn is_restored(self) -> bool {
        self.store.with(SessionStore::is_restored)
    }

    pub fn is_authenticated(self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }

    pub fn current_user(self) -> Option<String> {
        self.store.with(|s| s.current_user().map(str::to_owned))
    }

    /// What a protected route should do right now.
    pub fn guard(self) -> GuardDecision {
        self.store.with(guard_decision)
    }

    /// # Errors
    ///
    /// Returns the storage failure from [`SessionStore::login`], or
    /// [`StorageError::Unavailable`] once the handle's owner is gone.
    pub fn login(self, username: &str) -> Result<(), StorageError> {
        self.store.try_update(|s| s.login(username)).unwrap_or(Err(StorageError::Unavailable))
    }

    /// # Errors
    ///
    /// Returns the storage failure from [`SessionStore::logout`], or
    /// [`StorageError::Unavailable`] once the handle's owner is gone.
    pub fn logout(self) -> Result<(), StorageError> {
        self.store.try_update(SessionStore::logout).unwrap_or(Err(StorageError::Unavailable))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Publishes `session` to every route page rendered inside it.
#[component]
pub fn SessionProvider(session: Session, children: Children) -> impl IntoView {
    provide_context(session);
    children()
}

/// The session published by the nearest [`SessionProvider`].
///
/// # Panics
///
/// Panics when called outside a `SessionProvider`; that is a wiring bug, not
/// a runtime condition.
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(|| panic!("use_session must be called within a SessionProvider"))
}
