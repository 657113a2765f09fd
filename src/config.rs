use crate::error::BasiqError;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Authorization mode requested from the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScope {
    /// Token bound to a single end-user; requires a user id.
    Client,
    /// Token for the whole integration.
    #[default]
    Server,
}

impl AuthScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScope::Client => "CLIENT_ACCESS",
            AuthScope::Server => "SERVER_ACCESS",
        }
    }
}

impl fmt::Display for AuthScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthScope {
    type Err = BasiqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "CLIENT_ACCESS" => Ok(AuthScope::Client),
            "SERVER_ACCESS" => Ok(AuthScope::Server),
            "" => Err(BasiqError::InvalidConfig("scope is required")),
            _ => Err(BasiqError::InvalidConfig(
                "scope must be CLIENT_ACCESS or SERVER_ACCESS",
            )),
        }
    }
}

/// Credentials needed to start a [`Client`](crate::Client).
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub scope: AuthScope,
    pub user_id: Option<String>,
}

impl Config {
    pub fn new(api_key: impl Into<String>, scope: AuthScope) -> Self {
        Self {
            api_key: api_key.into(),
            scope,
            user_id: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Build a config from `BASIQ_API_KEY`, `BASIQ_SCOPE` and `BASIQ_USER_ID`.
    /// The scope defaults to `SERVER_ACCESS` when unset.
    pub fn from_env() -> Result<Self, BasiqError> {
        let api_key = env::var("BASIQ_API_KEY")
            .map_err(|_| BasiqError::InvalidConfig("BASIQ_API_KEY is not set"))?;
        let scope = match env::var("BASIQ_SCOPE") {
            Ok(raw) => raw.parse()?,
            Err(_) => AuthScope::default(),
        };
        let user_id = env::var("BASIQ_USER_ID").ok().filter(|u| !u.is_empty());

        let config = Self {
            api_key,
            scope,
            user_id,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every required parameter is present.
    pub fn validate(&self) -> Result<(), BasiqError> {
        if self.api_key.is_empty() {
            return Err(BasiqError::InvalidConfig("api key is required"));
        }
        let has_user = self.user_id.as_deref().is_some_and(|u| !u.is_empty());
        if self.scope == AuthScope::Client && !has_user {
            return Err(BasiqError::InvalidConfig(
                "user id is required when CLIENT_ACCESS scope is used",
            ));
        }
        Ok(())
    }
}

// Keep the api key out of logs and panics.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("scope", &self.scope)
            .field("user_id", &self.user_id)
            .finish()
    }
}
