//! Error types for the Artsy API client core.
//!
//! # Design
//! The failure surface is deliberately tiny. Building a request is total for
//! every well-formed descriptor — the only way it can fail is a misconfigured
//! environment that yields no usable base URL. Fixture lookup failure is an
//! offline-testing concern and indicates the registry and the fixture table
//! have drifted; tests should unwrap it and abort.

use thiserror::Error;

/// Errors returned by `ArtsyClient::build` and fixture lookup.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The environment produced no usable base URL. Signalled instead of
    /// composing a malformed URL.
    #[error("invalid base URL: {reason}")]
    InvalidBaseUrl { reason: String },

    /// No fixture payload is registered under this name.
    #[error("no fixture named {0:?}")]
    FixtureNotFound(String),
}
