//! Session State
//!
//! Holds the authenticated user and bearer token. A present token never
//! implies a trusted user: the user field is only populated after a
//! successful `/auth/me` round trip, and a failed round trip clears both.

use coop_client::{Role, User};

/// Which credential form is shown on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Focused field of the login/signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    Name,
    #[default]
    Email,
    Password,
    Phone,
    /// Login mode only; holds a token issued elsewhere
    Token,
}

impl AuthField {
    /// Tab order for the active mode
    pub fn next(self, mode: AuthMode) -> Self {
        match (mode, self) {
            (AuthMode::Login, AuthField::Email) => AuthField::Password,
            (AuthMode::Login, AuthField::Password) => AuthField::Token,
            (AuthMode::Login, _) => AuthField::Email,
            (AuthMode::Signup, AuthField::Name) => AuthField::Email,
            (AuthMode::Signup, AuthField::Email) => AuthField::Password,
            (AuthMode::Signup, AuthField::Password) => AuthField::Phone,
            (AuthMode::Signup, _) => AuthField::Name,
        }
    }
}

/// Login/signup form state
///
/// The token field takes a bearer token issued to another session (a browser
/// login) pasted in place of credentials; a non-empty token wins over the
/// email/password pair on submit.
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub token: String,
    pub focus: AuthField,
}

impl LoginFormState {
    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::Phone => &mut self.phone,
            AuthField::Token => &mut self.token,
        }
    }
}

/// Session state
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub form: LoginFormState,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.role == Role::Admin)
    }
}
