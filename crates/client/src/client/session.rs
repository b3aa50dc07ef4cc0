//! Client-level session management helpers.
//!
//! # Invariants
//! - [`NimbleClient::get_auth_token`] logs in only when no token is held, so
//!   a client issues at most one token request.

use crate::client::NimbleClient;
use crate::endpoints;
use crate::error::Result;

impl NimbleClient {
    /// Get the session token, logging in if none is held yet.
    pub(crate) async fn get_auth_token(&mut self) -> Result<String> {
        if let Some(token) = self.session_manager.session_token() {
            return Ok(token.to_string());
        }
        self.login().await
    }

    /// Exchange the configured credentials for a session token.
    ///
    /// The token is stored for subsequent API calls.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpError` if the array cannot be reached.
    /// Returns [`crate::ClientError::ApiError`] if the array rejects the request.
    /// Returns [`crate::ClientError::MissingField`] if the response carries no token.
    pub async fn login(&mut self) -> Result<String> {
        let token = endpoints::login(
            &self.http,
            &self.base_url,
            self.session_manager.username(),
            self.session_manager.password(),
        )
        .await?;

        self.session_manager.set_session_token(token.clone());
        tracing::debug!("Obtained session token for {}", self.session_manager.username());

        Ok(token)
    }

    /// Whether a session token has been obtained.
    pub fn is_logged_in(&self) -> bool {
        self.session_manager.has_session()
    }
}
