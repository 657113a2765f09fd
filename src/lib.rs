//! Rust client for the Basiq open-banking REST API.
//! Provides an async interface over the users, banking data, insights,
//! payments and platform endpoints, with typed models for every response.
//!
//! A [`Client`] authenticates lazily: the first request goes out without a
//! token and an HTTP 401 triggers one token exchange and one retry.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
mod resources;

pub use auth::{AuthToken, DEFAULT_AUTH_DEBOUNCE, SessionToken};
pub use client::Client;
pub use config::{AuthScope, Config};
pub use error::{ApiError, BasiqError, ErrorDetail, ErrorSource};
pub use models::*;
