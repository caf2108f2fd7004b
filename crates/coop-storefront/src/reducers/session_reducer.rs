//! Session Reducer
//!
//! Credential exchange and identity verification outcomes. A failed login
//! keeps any stored token untouched; a failed identity verification clears
//! both token and user.

use crate::actions::SessionAction;
use crate::state::{AuthMode, LoginFormState, SessionState};

/// Reduce session actions
pub fn reduce_session(mut state: SessionState, action: &SessionAction) -> SessionState {
    match action {
        SessionAction::FormChar(c) => {
            state.form.field_mut().push(*c);
        }

        SessionAction::FormBackspace => {
            state.form.field_mut().pop();
        }

        SessionAction::FormNextField => {
            state.form.focus = state.form.focus.next(state.form.mode);
        }

        SessionAction::ToggleMode => {
            state.form.mode = match state.form.mode {
                AuthMode::Login => AuthMode::Signup,
                AuthMode::Signup => AuthMode::Login,
            };
            state.form.focus = Default::default();
            state.error = None;
        }

        SessionAction::Pending => {
            state.loading = true;
            state.error = None;
        }

        SessionAction::Authenticated { user, token } => {
            state.loading = false;
            state.error = None;
            state.user = Some(user.clone());
            state.token = Some(token.clone());
            state.form = LoginFormState::default();
            log::info!("Session: authenticated as {}", user.email);
        }

        SessionAction::Failed(message) => {
            // Login rejection leaves any stored token alone
            state.loading = false;
            state.error = Some(message.clone());
        }

        SessionAction::CurrentUserLoaded(user) => {
            state.loading = false;
            state.error = None;
            state.user = Some(user.clone());
        }

        SessionAction::CurrentUserFailed(message) => {
            // A token the backend rejects is dead weight
            state.loading = false;
            state.user = None;
            state.token = None;
            log::warn!("Session: identity verification failed: {message}");
        }

        SessionAction::AdoptToken(token) => {
            // The pasted token must not linger in the form
            state.token = Some(token.clone());
            state.form = LoginFormState::default();
        }

        SessionAction::Logout => {
            state.user = None;
            state.token = None;
            state.error = None;
            state.form = LoginFormState::default();
        }

        SessionAction::ClearError => {
            state.error = None;
        }

        // Request variants are handled by the session middleware
        SessionAction::Submit | SessionAction::FetchCurrentUser => {}
    }

    state
}
