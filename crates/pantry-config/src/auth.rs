//! Bearer credential configuration.
//!
//! Pantry does not run a login flow. Whatever identity provider issued the
//! access token, it is handed over here and attached to every API request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Bearer access token for the recipe API.
    #[serde(default)]
    pub token: String,
}

impl AuthConfig {
    /// Check if a token is present.
    pub fn is_configured(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// The token, if one is configured.
    pub fn bearer(&self) -> Option<&str> {
        self.is_configured().then(|| self.token.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = AuthConfig::default();
        assert!(!config.is_configured());
        assert!(config.bearer().is_none());
    }

    #[test]
    fn whitespace_token_is_not_configured() {
        let config = AuthConfig {
            token: "  \n".into(),
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn bearer_is_trimmed() {
        let config = AuthConfig {
            token: " eyJhbGciOi \n".into(),
        };
        assert_eq!(config.bearer(), Some("eyJhbGciOi"));
    }
}
