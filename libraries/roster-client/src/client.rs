//! HTTP client for the remote user collection.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, NewUser};
use reqwest::Client;
use roster_core::User;
use std::time::Duration;
use tracing::debug;

/// Client for a JSONPlaceholder-style user collection service.
///
/// The client is cheap to clone-by-reference and holds no mutable state;
/// every operation is a single request with no retries and no
/// cancellation.
#[derive(Debug)]
pub struct DirectoryClient {
    http: Client,
    base_url: String,
}

impl DirectoryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full user collection.
    ///
    /// Called once at startup; all paging is client-side, so no query
    /// parameters are sent.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, "Fetching user collection");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let users: Vec<User> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user list: {}", e))
            })?;

            debug!(users = users.len(), "Fetched user collection");
            Ok(users)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Create a user in the remote collection.
    ///
    /// Returns the created (or echoed) record. The mock service does not
    /// durably persist the write; the response is still treated as
    /// authoritative for local state.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, name = %new_user.name, "Creating user");

        let response = self
            .http
            .post(&url)
            .json(new_user)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let user: User = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse created user: {}", e))
            })?;

            debug!(id = user.id, "User created");
            Ok(user)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        // Valid URLs
        assert!(DirectoryClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(DirectoryClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(DirectoryClient::new(ClientConfig::new("")).is_err());
        assert!(DirectoryClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(DirectoryClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn url_normalization() {
        let client = DirectoryClient::new(ClientConfig::new("https://example.com/"))
            .expect("valid url");

        // Trailing slash removed
        assert_eq!(client.base_url(), "https://example.com");
    }
}
