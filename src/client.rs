use crate::auth::{API_VERSION, Authenticator, VERSION_HEADER};
use crate::config::Config;
use crate::error::{ApiError, BasiqError};
use crate::models::Page;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as HttpClient, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

const BASE_URL: &str = "https://au-api.basiq.io";

/// Client for the Basiq API.
///
/// Holds exactly one bearer token, obtained lazily: the first request goes
/// out unauthenticated, and any 401 triggers a single token exchange followed
/// by one retry. The client is `Send + Sync`; share it behind an `Arc`.
pub struct Client {
    http: HttpClient,
    base_url: String,
    auth: Authenticator,
}

impl Client {
    /// Create a new client with the default base URL.
    pub fn new(config: Config) -> Result<Self, BasiqError> {
        config.validate()?;
        let http = HttpClient::builder().build()?;

        info!(
            "Initialized Basiq API client with default base URL (scope {})",
            config.scope
        );
        Ok(Self {
            http,
            base_url: BASE_URL.to_string(),
            auth: Authenticator::new(config),
        })
    }

    /// Override the base URL (useful for tests or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        info!("Updated Basiq API base URL to {}", self.base_url);
        self
    }

    /// Change how long a freshly obtained token is trusted before another
    /// exchange is allowed.
    pub fn with_auth_debounce(mut self, window: Duration) -> Self {
        self.auth.set_debounce(window);
        self
    }

    /// Apply a per-request timeout. By default the transport default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, BasiqError> {
        self.http = HttpClient::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Obtain a fresh bearer token unless one was obtained within the
    /// debounce window.
    pub async fn authenticate(&self) -> Result<(), BasiqError> {
        self.auth.authenticate(&self.http, &self.base_url).await
    }

    /// When the currently held token was issued, if any.
    pub async fn token_issued_at(&self) -> Option<DateTime<Utc>> {
        self.auth.issued_at().await
    }

    /// Run `call`; on a 401 reauthenticate and run it exactly once more.
    /// A failed reauthentication is returned in place of the original 401.
    pub(crate) async fn with_reauth<T, F, Fut>(&self, call: F) -> Result<T, BasiqError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, BasiqError>>,
    {
        match call().await {
            Err(err) if err.is_unauthorized() => {
                warn!("Request unauthorized, refreshing token and retrying once");
                self.authenticate().await?;
                call().await
            }
            result => result,
        }
    }

    /// Build an endpoint URL from path segments, escaping each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, BasiqError> {
        if segments.iter().any(|s| s.is_empty()) {
            return Err(BasiqError::InvalidParameter(
                "path identifiers must not be empty",
            ));
        }
        let mut url =
            Url::parse(&self.base_url).map_err(|e| BasiqError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| BasiqError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, BasiqError> {
        let body = self.execute(Method::GET, url, None::<&()>).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
    ) -> Result<T, BasiqError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(method, url, body).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub(crate) async fn delete(&self, url: &Url) -> Result<(), BasiqError> {
        self.execute(Method::DELETE, url, None::<&()>).await?;
        Ok(())
    }

    /// Follow `links.next` from `first` until it runs out, collecting every
    /// page's items in order. A `next` link that leaves the API origin or
    /// points at an already fetched page aborts the walk; the bearer token is
    /// never sent elsewhere.
    pub(crate) async fn collect_pages<T: DeserializeOwned>(
        &self,
        first: &Url,
    ) -> Result<Vec<T>, BasiqError> {
        let mut items = Vec::new();
        let mut seen = HashSet::new();
        let mut next = Some(first.clone());
        while let Some(url) = next {
            if !seen.insert(url.clone()) {
                return Err(BasiqError::InvalidUrl(format!(
                    "pagination loops back to {url}"
                )));
            }
            let page: Page<T> = self.get_json(&url).await?;
            debug!("Fetched page with {} items", page.data.len());
            items.extend(page.data);
            next = match page.links.next.as_deref() {
                Some(link) if !link.is_empty() => {
                    let resolved = url
                        .join(link)
                        .map_err(|e| BasiqError::InvalidUrl(e.to_string()))?;
                    if resolved.origin() != first.origin() {
                        return Err(BasiqError::InvalidUrl(format!(
                            "next page {resolved} is outside the API origin"
                        )));
                    }
                    Some(resolved)
                }
                _ => None,
            };
        }
        Ok(items)
    }

    /// Issue one request with the current headers and classify the status.
    async fn execute<B>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
    ) -> Result<Vec<u8>, BasiqError>
    where
        B: Serialize + ?Sized,
    {
        debug!("{} request to {}", method, url);
        let mut request = self
            .http
            .request(method, url.clone())
            .header(ACCEPT, "application/json")
            .header(VERSION_HEADER, API_VERSION);
        if let Some(bearer) = self.auth.bearer().await {
            request = request.header(AUTHORIZATION, bearer);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Received status {}", status);
        let bytes = response.bytes().await?.to_vec();

        if is_accepted(status) {
            Ok(bytes)
        } else {
            Err(ApiError::from_response(status, &bytes).into())
        }
    }
}

/// Statuses the API uses for success. Anything else, including other 2xx
/// codes, is decoded as an error envelope.
pub(crate) fn is_accepted(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED | StatusCode::NO_CONTENT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthScope;

    fn client() -> Client {
        Client::new(Config::new("key", AuthScope::Server)).unwrap()
    }

    #[test]
    fn new_validates_config() {
        assert!(Client::new(Config::new("", AuthScope::Server)).is_err());
        assert!(Client::new(Config::new("k", AuthScope::Client)).is_err());
        assert!(Client::new(Config::new("k", AuthScope::Server)).is_ok());
    }

    #[test]
    fn endpoint_escapes_segments() {
        let url = client().endpoint(&["users", "a b/c", "accounts"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://au-api.basiq.io/users/a%20b%2Fc/accounts"
        );
    }

    #[test]
    fn endpoint_handles_trailing_slash_in_base() {
        let client = client().with_base_url("http://localhost:8080/");
        let url = client.endpoint(&["jobs", "j1"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/jobs/j1");
    }

    #[test]
    fn accepts_only_api_success_statuses() {
        assert!(is_accepted(StatusCode::OK));
        assert!(is_accepted(StatusCode::NO_CONTENT));
        assert!(!is_accepted(StatusCode::NON_AUTHORITATIVE_INFORMATION));
        assert!(!is_accepted(StatusCode::PARTIAL_CONTENT));
        assert!(!is_accepted(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn endpoint_rejects_empty_identifier() {
        assert!(matches!(
            client().endpoint(&["users", ""]),
            Err(BasiqError::InvalidParameter(_))
        ));
    }
}
