//! Credential storage and the session guard
//!
//! Every authenticated call goes through the [`SessionGuard`]: it hands out the
//! bearer token, and when the server answers 401/403 it clears the credential,
//! tells the user once, and flips the session channel so the embedding app can
//! redirect to its login surface. Expiry handling is idempotent: any number of
//! concurrently failing calls produce exactly one clear, one notice and one
//! logged-out transition.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::error::{Error, Result};
use crate::notify::Notice;
use crate::traits::{NotificationSink, TokenStore};

/// In-memory token storage, the browser-localStorage analog
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token<S: ToString>(token: S) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn take(&self) -> Option<String> {
        self.token.lock().unwrap().take()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    Authenticated,
}

/// Watch this to know when to show the login surface
pub type SessionReceiver = watch::Receiver<SessionState>;

pub struct SessionGuard {
    store: Arc<dyn TokenStore>,
    notifier: Arc<dyn NotificationSink>,
    state: watch::Sender<SessionState>,
    // kept so the sender always has at least one receiver
    _receiver: watch::Receiver<SessionState>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn TokenStore>, notifier: Arc<dyn NotificationSink>) -> Self {
        let initial = match store.load() {
            Some(_) => SessionState::Authenticated,
            None => SessionState::LoggedOut,
        };
        let (state, receiver) = watch::channel(initial);
        Self {
            store,
            notifier,
            state,
            _receiver: receiver,
        }
    }

    /// A receiver that observes login/logout transitions
    pub fn subscribe(&self) -> SessionReceiver {
        self.state.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        *self.state.borrow() == SessionState::Authenticated
    }

    /// The token to attach to a request, or `Error::Unauthorized` if there is none
    /// (the caller should end up on the login surface either way)
    pub fn bearer(&self) -> Result<String> {
        self.store.load().ok_or(Error::Unauthorized)
    }

    /// Record a fresh token after a successful OTP verification
    pub fn login(&self, token: &str) {
        self.store.save(token);
        let _ = self.state.send(SessionState::Authenticated);
    }

    /// Explicit logout. No notice; the user asked for it
    pub fn logout(&self) {
        self.store.take();
        let _ = self.state.send(SessionState::LoggedOut);
    }

    /// The server rejected the credential (401/403).
    ///
    /// Only the call that actually removes the token emits the notice and the
    /// transition; concurrent losers see the store already empty and do nothing.
    pub fn expire(&self) {
        match self.store.take() {
            Some(_) => {
                self.notifier.notify(Notice::warning("Needs to login!"));
                let _ = self.state.send(SessionState::LoggedOut);
            }
            None => {
                log::debug!("Session already expired, nothing to do");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Level, MemorySink};

    fn guard_with_token() -> (Arc<MemorySink>, SessionGuard) {
        let sink = Arc::new(MemorySink::new());
        let store = Arc::new(MemoryTokenStore::with_token("tok-123"));
        let guard = SessionGuard::new(store, sink.clone());
        (sink, guard)
    }

    #[test]
    fn bearer_requires_a_stored_token() {
        let (_, guard) = guard_with_token();
        assert_eq!(guard.bearer().unwrap(), "tok-123");

        guard.logout();
        assert!(matches!(guard.bearer(), Err(Error::Unauthorized)));
    }

    #[test]
    fn expire_is_exactly_once() {
        let (sink, guard) = guard_with_token();
        let mut session = guard.subscribe();
        assert!(guard.is_authenticated());

        guard.expire();
        guard.expire();
        guard.expire();

        let notices = sink.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, Level::Warning);
        assert!(session.has_changed().unwrap());
        assert_eq!(*session.borrow_and_update(), SessionState::LoggedOut);
        assert!(matches!(guard.bearer(), Err(Error::Unauthorized)));
    }

    #[test]
    fn login_after_expiry_restores_the_session() {
        let (_, guard) = guard_with_token();
        guard.expire();
        guard.login("tok-456");
        assert!(guard.is_authenticated());
        assert_eq!(guard.bearer().unwrap(), "tok-456");
    }

    #[test]
    fn starts_logged_out_without_a_token() {
        let sink = Arc::new(MemorySink::new());
        let guard = SessionGuard::new(Arc::new(MemoryTokenStore::new()), sink);
        assert!(!guard.is_authenticated());
    }
}
