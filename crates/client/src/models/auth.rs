//! Authentication models for the `/v1/tokens` API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/tokens`: `{"data": {"username", "password"}}`.
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub data: TokenCredentials<'a>,
}

#[derive(Debug, Serialize)]
pub struct TokenCredentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> TokenRequest<'a> {
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self {
            data: TokenCredentials { username, password },
        }
    }
}

/// The `data` object of a token response.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionTokenData {
    #[serde(default)]
    pub session_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_token_request() {
        let body = serde_json::to_value(TokenRequest::new("monitor", "secret")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"data": {"username": "monitor", "password": "secret"}})
        );
    }

    #[test]
    fn test_deserialize_token_response() {
        let json = r#"{"session_token": "b1c3bd9c1f0d8c3e", "username": "monitor"}"#;
        let data: SessionTokenData = serde_json::from_str(json).unwrap();
        assert_eq!(data.session_token.as_deref(), Some("b1c3bd9c1f0d8c3e"));
    }
}
