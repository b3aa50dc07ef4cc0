//! Credentials and session token storage.

use secrecy::{ExposeSecret, SecretString};

/// Holds the API credentials and the session token obtained with them.
///
/// The token is requested once per run and never refreshed.
#[derive(Debug)]
pub struct SessionManager {
    username: String,
    password: SecretString,
    session_token: Option<SecretString>,
}

impl SessionManager {
    /// Create a new session manager for the given credentials.
    pub fn new(username: String, password: SecretString) -> Self {
        Self {
            username,
            password,
            session_token: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Set the session token (received from the token response).
    pub fn set_session_token(&mut self, token: String) {
        self.session_token = Some(SecretString::new(token.into()));
    }

    /// Get the token to send in `X-Auth-Token`, if logged in.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_ref().map(|t| t.expose_secret())
    }

    pub fn has_session(&self) -> bool {
        self.session_token.is_some()
    }
}
