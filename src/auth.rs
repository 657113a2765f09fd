//! Bearer token handling: the token store and the debounced authenticator.

use crate::client::is_accepted;
use crate::config::Config;
use crate::error::{ApiError, BasiqError};
use chrono::{DateTime, Utc};
use log::{debug, info};
use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Interval during which a freshly issued token is trusted without asking
/// the token endpoint again.
pub const DEFAULT_AUTH_DEBOUNCE: Duration = Duration::from_secs(5);

pub(crate) const VERSION_HEADER: &str = "basiq-version";
pub(crate) const API_VERSION: &str = "3.0";

/// Body of a successful `POST /token`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
}

/// The bearer token currently held by a client.
#[derive(Debug, Clone)]
pub struct SessionToken {
    access_token: String,
    issued_at: DateTime<Utc>,
    refreshed: Instant,
}

impl SessionToken {
    fn new(access_token: String) -> Self {
        Self {
            access_token,
            issued_at: Utc::now(),
            refreshed: Instant::now(),
        }
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Monotonic check, immune to wall-clock adjustments.
    fn is_fresh(&self, window: Duration) -> bool {
        self.refreshed.elapsed() < window
    }
}

pub(crate) struct Authenticator {
    config: Config,
    debounce: Duration,
    token: Mutex<Option<SessionToken>>,
}

impl Authenticator {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            config,
            debounce: DEFAULT_AUTH_DEBOUNCE,
            token: Mutex::new(None),
        }
    }

    pub(crate) fn set_debounce(&mut self, window: Duration) {
        self.debounce = window;
    }

    pub(crate) async fn bearer(&self) -> Option<String> {
        self.token
            .lock()
            .await
            .as_ref()
            .map(|t| format!("Bearer {}", t.access_token))
    }

    pub(crate) async fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.token.lock().await.as_ref().map(SessionToken::issued_at)
    }

    /// Exchange the api key for a new bearer token unless one was obtained
    /// within the debounce window. The lock is held across the whole exchange,
    /// so concurrent callers queue up and then observe the fresh token.
    pub(crate) async fn authenticate(
        &self,
        http: &HttpClient,
        base_url: &str,
    ) -> Result<(), BasiqError> {
        let mut guard = self.token.lock().await;
        if guard.as_ref().is_some_and(|t| t.is_fresh(self.debounce)) {
            debug!("Token refreshed within debounce window, skipping exchange");
            return Ok(());
        }

        let token = self.exchange(http, base_url).await?;
        *guard = Some(SessionToken::new(token.access_token));
        info!(
            "Obtained {} token for scope {} (expires in {}s)",
            token.token_type, self.config.scope, token.expires_in
        );
        Ok(())
    }

    async fn exchange(&self, http: &HttpClient, base_url: &str) -> Result<AuthToken, BasiqError> {
        let url = format!("{}/token", base_url.trim_end_matches('/'));
        let mut form = vec![("scope", self.config.scope.as_str())];
        if let Some(user_id) = self.config.user_id.as_deref().filter(|u| !u.is_empty()) {
            form.push(("userId", user_id));
        }

        debug!("POST request to {}", url);
        let response = http
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(VERSION_HEADER, API_VERSION)
            .header(AUTHORIZATION, format!("Basic {}", self.config.api_key))
            .form(&form)
            .send()
            .await?;
        let status = response.status();
        debug!("Received status {}", status);
        let body = response.bytes().await?;

        if !is_accepted(status) {
            return Err(ApiError::from_response(status, &body).into());
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_respects_window() {
        let token = SessionToken::new("abc".into());
        assert!(token.is_fresh(Duration::from_secs(5)));
        assert!(!token.is_fresh(Duration::ZERO));
    }

    #[test]
    fn token_response_tolerates_missing_fields() {
        let token: AuthToken = serde_json::from_str(r#"{"access_token":"xyz"}"#).unwrap();
        assert_eq!(token.access_token, "xyz");
        assert_eq!(token.expires_in, 0);
    }

    #[tokio::test]
    async fn bearer_is_absent_before_authentication() {
        let auth = Authenticator::new(Config::new("k", crate::AuthScope::Server));
        assert!(auth.bearer().await.is_none());
        assert!(auth.issued_at().await.is_none());
    }
}
