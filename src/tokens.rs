use crate::Error;
use std::time::{Duration, SystemTime};

/// A token-endpoint response, kept as raw JSON with typed accessors.
#[derive(Debug, Clone)]
pub struct OAuth2Tokens {
    data: serde_json::Value,
    received_at: SystemTime,
}

impl OAuth2Tokens {
    pub fn new(data: serde_json::Value) -> Self {
        Self {
            data,
            received_at: SystemTime::now(),
        }
    }

    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    pub fn token_type(&self) -> Result<&str, Error> {
        self.data["token_type"].as_str().ok_or(Error::MissingField {
            field: "token_type",
        })
    }

    pub fn access_token(&self) -> Result<&str, Error> {
        self.data["access_token"]
            .as_str()
            .ok_or(Error::MissingField {
                field: "access_token",
            })
    }

    /// Spotify access tokens expire after one hour.
    pub fn access_token_expires_in_seconds(&self) -> Result<u64, Error> {
        self.data["expires_in"].as_u64().ok_or(Error::MissingField {
            field: "expires_in",
        })
    }

    pub fn access_token_expires_at(&self) -> Result<SystemTime, Error> {
        let expires_in = self.access_token_expires_in_seconds()?;
        Ok(self.received_at + Duration::from_secs(expires_in))
    }

    /// Refresh responses may omit a new refresh token; keep the old one.
    pub fn has_refresh_token(&self) -> bool {
        self.data["refresh_token"].is_string()
    }

    pub fn refresh_token(&self) -> Result<&str, Error> {
        self.data["refresh_token"]
            .as_str()
            .ok_or(Error::MissingField {
                field: "refresh_token",
            })
    }

    pub fn has_scopes(&self) -> bool {
        self.data["scope"].is_string()
    }

    /// Scopes granted by the user, from the space-separated `scope` field.
    pub fn scopes(&self) -> Result<Vec<String>, Error> {
        let scope = self.data["scope"]
            .as_str()
            .ok_or(Error::MissingField { field: "scope" })?;
        Ok(scope.split(' ').map(String::from).collect())
    }
}
