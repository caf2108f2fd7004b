//! Session actions
//!
//! Request variants (`Submit`, `FetchCurrentUser`, `AdoptToken`, `Logout`)
//! are handled by the session middleware; completion variants carry the
//! normalized outcome into the reducer.

use coop_client::User;

/// Actions for the session slice
#[derive(Debug, Clone)]
pub enum SessionAction {
    // === Form editing ===
    FormChar(char),
    FormBackspace,
    FormNextField,
    /// Switch between login and signup
    ToggleMode,

    // === Credential exchange ===
    /// Submit the active form (login or signup per form mode)
    Submit,
    /// Request left for the backend
    Pending,
    /// Credential exchange succeeded; token already persisted by middleware
    Authenticated { user: User, token: String },
    /// Credential exchange failed; any stored token is left untouched
    Failed(String),

    // === Identity verification ===
    /// Resolve the user behind the stored token; fails immediately with no
    /// network call when no token is stored
    FetchCurrentUser,
    CurrentUserLoaded(User),
    /// Verification failed: token and user are both cleared (treated as
    /// logged out, not merely an error)
    CurrentUserFailed(String),

    /// Adopt a token issued elsewhere (the persisted snapshot at startup, or
    /// one pasted into the login form) and verify it
    AdoptToken(String),

    /// Clear token and user unconditionally; cannot fail
    Logout,

    /// Dismiss the inline error banner
    ClearError,
}
