//! Session Middleware
//!
//! Owns the persisted bearer token. The snapshot on disk mirrors the token in
//! state: adopted or freshly-issued tokens are written through, and any path
//! that invalidates the session (logout, a failed identity verification)
//! clears the file as well.
//!
//! Also enforces the verification precondition: `FetchCurrentUser` with no
//! stored token fails immediately without a network round trip, so the API
//! middleware behind it never sees the action.

use crate::actions::{Action, GlobalAction, SessionAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, NoticeTopic};
use coop_config::SnapshotStore;

/// Middleware for token persistence and session preconditions
pub struct SessionMiddleware {
    token_store: Box<dyn SnapshotStore<String>>,
}

impl SessionMiddleware {
    pub fn new(token_store: Box<dyn SnapshotStore<String>>) -> Self {
        Self { token_store }
    }

    fn persist(&self, token: &str) {
        if let Err(e) = self.token_store.save(&token.to_string()) {
            log::error!("SessionMiddleware: failed to persist token: {e}");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.token_store.clear() {
            log::error!("SessionMiddleware: failed to clear token: {e}");
        }
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            // Restore the persisted token at startup and verify it
            Action::Global(GlobalAction::Bootstrap) => {
                if let Some(token) = self.token_store.load() {
                    log::info!("SessionMiddleware: restoring persisted token");
                    dispatcher.dispatch(Action::Session(SessionAction::AdoptToken(token)));
                }
                true
            }

            Action::Session(SessionAction::AdoptToken(token)) => {
                self.persist(token);
                dispatcher.dispatch(Action::Session(SessionAction::FetchCurrentUser));
                true
            }

            Action::Session(SessionAction::Authenticated { token, .. }) => {
                self.persist(token);
                true
            }

            // No token means the verification cannot succeed; short-circuit
            // before the API middleware spends a request on it
            Action::Session(SessionAction::FetchCurrentUser) => {
                if state.session.token.is_none() {
                    dispatcher.dispatch(Action::Session(SessionAction::CurrentUserFailed(
                        "Not authenticated".to_string(),
                    )));
                    return false;
                }
                true
            }

            Action::Session(SessionAction::CurrentUserFailed(_)) => {
                self.clear();
                true
            }

            Action::Session(SessionAction::Logout) => {
                self.clear();
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                    NoticeTopic::Session,
                    "Signed out",
                )));
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coop_config::MemoryStore;
    use std::sync::mpsc;

    fn harness() -> (Dispatcher, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Dispatcher::new(tx), rx)
    }

    #[test]
    fn bootstrap_adopts_a_persisted_token() {
        let (dispatcher, rx) = harness();
        let mut mw = SessionMiddleware::new(Box::new(MemoryStore::with_value("tok-1".to_string())));

        let pass = mw.handle(
            &Action::Global(GlobalAction::Bootstrap),
            &AppState::new(),
            &dispatcher,
        );

        assert!(pass);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Session(SessionAction::AdoptToken(t))) if t == "tok-1"
        ));
    }

    #[test]
    fn bootstrap_without_token_dispatches_nothing() {
        let (dispatcher, rx) = harness();
        let mut mw = SessionMiddleware::new(Box::new(MemoryStore::<String>::default()));

        mw.handle(
            &Action::Global(GlobalAction::Bootstrap),
            &AppState::new(),
            &dispatcher,
        );

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn fetch_current_user_without_token_short_circuits() {
        let (dispatcher, rx) = harness();
        let mut mw = SessionMiddleware::new(Box::new(MemoryStore::<String>::default()));

        let pass = mw.handle(
            &Action::Session(SessionAction::FetchCurrentUser),
            &AppState::new(),
            &dispatcher,
        );

        assert!(!pass);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Session(SessionAction::CurrentUserFailed(_)))
        ));
    }

    #[test]
    fn fetch_current_user_with_token_passes_through() {
        let (dispatcher, _rx) = harness();
        let mut mw = SessionMiddleware::new(Box::new(MemoryStore::<String>::default()));
        let mut state = AppState::new();
        state.session.token = Some("tok".to_string());

        assert!(mw.handle(
            &Action::Session(SessionAction::FetchCurrentUser),
            &state,
            &dispatcher,
        ));
    }

    #[test]
    fn logout_and_verification_failure_clear_the_store() {
        let (dispatcher, _rx) = harness();
        let store = MemoryStore::with_value("tok".to_string());
        let handle = store.clone();
        let mut mw = SessionMiddleware::new(Box::new(store));

        mw.handle(
            &Action::Session(SessionAction::Logout),
            &AppState::new(),
            &dispatcher,
        );
        assert!(handle.load().is_none());

        handle.save(&"tok2".to_string()).unwrap();
        mw.handle(
            &Action::Session(SessionAction::CurrentUserFailed("expired".to_string())),
            &AppState::new(),
            &dispatcher,
        );
        assert!(handle.load().is_none());
    }

    #[test]
    fn adopt_token_persists_and_verifies() {
        let (dispatcher, rx) = harness();
        let store = MemoryStore::<String>::default();
        let handle = store.clone();
        let mut mw = SessionMiddleware::new(Box::new(store));

        mw.handle(
            &Action::Session(SessionAction::AdoptToken("fresh".to_string())),
            &AppState::new(),
            &dispatcher,
        );

        assert_eq!(handle.load().as_deref(), Some("fresh"));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Session(SessionAction::FetchCurrentUser))
        ));
    }
}
