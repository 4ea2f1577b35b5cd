//! Stateless request builder for the Artsy API.
//!
//! # Design
//! `ArtsyClient` holds a server-config collaborator and the client
//! credentials, and carries no mutable state between calls. `build` is the
//! single entry point: descriptor in, transport-agnostic [`HttpRequest`] out.
//! The staging/production flag is consulted on every call — never cached —
//! so tests can flip it between builds. The caller executes the actual HTTP
//! round-trip, keeping the core deterministic and free of I/O dependencies.

use tracing::debug;

use crate::endpoints::Endpoint;
use crate::error::ApiError;
use crate::http::HttpRequest;

pub const PRODUCTION_BASE_URL: &str = "https://api.artsy.net";
pub const STAGING_BASE_URL: &str = "https://stagingapi.artsy.net";

/// External configuration collaborator: which server are we talking to?
///
/// The default `base_url` derives the host from the staging flag. Overriding
/// it lets tests point the client at an arbitrary server (e.g. the in-process
/// mock), and is also where misconfiguration can surface — a `None` or
/// malformed base is the one thing `build` rejects.
pub trait ServerConfig {
    fn use_staging(&self) -> bool;

    fn base_url(&self) -> Option<String> {
        let base = if self.use_staging() {
            STAGING_BASE_URL
        } else {
            PRODUCTION_BASE_URL
        };
        Some(base.to_string())
    }
}

/// Plain staging/production switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Environment {
    pub use_staging: bool,
}

impl ServerConfig for Environment {
    fn use_staging(&self) -> bool {
        self.use_staging
    }
}

/// Client key/secret from the credential provider.
///
/// Absent values are submitted as empty strings rather than failing — the
/// server rejects them, not this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub key: Option<String>,
    pub secret: Option<String>,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            secret: Some(secret.into()),
        }
    }

    pub fn key_or_default(&self) -> &str {
        self.key.as_deref().unwrap_or("")
    }

    pub fn secret_or_default(&self) -> &str {
        self.secret.as_deref().unwrap_or("")
    }
}

/// Synchronous, stateless request builder.
///
/// Builds [`HttpRequest`] values without touching the network. Safe to share
/// across threads: every method takes `&self` and there is no interior
/// mutability.
#[derive(Debug, Clone)]
pub struct ArtsyClient<C: ServerConfig> {
    config: C,
    credentials: Credentials,
}

impl<C: ServerConfig> ArtsyClient<C> {
    pub fn new(config: C, credentials: Credentials) -> Self {
        Self {
            config,
            credentials,
        }
    }

    /// Assemble the request for one endpoint descriptor.
    ///
    /// Total for every well-formed descriptor; the sole failure mode is an
    /// environment that yields no usable base URL.
    pub fn build<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<HttpRequest, ApiError> {
        let base = self
            .config
            .base_url()
            .ok_or_else(|| ApiError::InvalidBaseUrl {
                reason: "environment supplied no base URL".to_string(),
            })?;
        let base = validated_base(&base)?;

        let url = format!("{base}{}", endpoint.path());
        let request = HttpRequest {
            url,
            method: endpoint.method(),
            params: endpoint.params(&self.credentials),
            requires_auth: endpoint.requires_auth(),
        };
        debug!(
            url = %request.url,
            method = ?request.method,
            requires_auth = request.requires_auth,
            "built request"
        );
        Ok(request)
    }
}

/// Reject bases that would compose into a malformed URL; trim a trailing
/// slash so concatenation with the descriptor's `/`-prefixed path is clean.
fn validated_base(base: &str) -> Result<&str, ApiError> {
    let host = base
        .strip_prefix("https://")
        .or_else(|| base.strip_prefix("http://"))
        .ok_or_else(|| ApiError::InvalidBaseUrl {
            reason: format!("not an http(s) URL: {base:?}"),
        })?;
    if host.is_empty() || host == "/" {
        return Err(ApiError::InvalidBaseUrl {
            reason: format!("empty host: {base:?}"),
        });
    }
    Ok(base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::ArtsyApi;
    use crate::http::HttpMethod;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn client(use_staging: bool) -> ArtsyClient<Environment> {
        ArtsyClient::new(Environment { use_staging }, Credentials::new("k", "s"))
    }

    #[test]
    fn staging_flag_selects_the_host() {
        let artwork = ArtsyApi::Artwork {
            id: "123".to_string(),
        };
        let req = client(true).build(&artwork).unwrap();
        assert_eq!(req.url, "https://stagingapi.artsy.net/api/v1/artwork/123");
        let req = client(false).build(&artwork).unwrap();
        assert_eq!(req.url, "https://api.artsy.net/api/v1/artwork/123");
    }

    #[test]
    fn request_carries_method_params_and_auth_flag() {
        let req = client(false).build(&ArtsyApi::XApp).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert!(!req.requires_auth);
        let params = req.params.unwrap();
        assert_eq!(params["client_id"], crate::params::ParamValue::from("k"));

        let req = client(false).build(&ArtsyApi::Ping).unwrap();
        assert!(req.params.is_none());
        assert!(req.requires_auth);
    }

    #[test]
    fn url_never_embeds_a_query_string() {
        let req = client(false).build(&ArtsyApi::Auctions).unwrap();
        assert_eq!(req.url, "https://api.artsy.net/api/v1/sales");
        assert!(!req.url.contains('?'));
        assert!(req.params.is_some());
    }

    struct CustomBase(&'static str);

    impl ServerConfig for CustomBase {
        fn use_staging(&self) -> bool {
            false
        }
        fn base_url(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    struct NoBase;

    impl ServerConfig for NoBase {
        fn use_staging(&self) -> bool {
            false
        }
        fn base_url(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ArtsyClient::new(CustomBase("http://localhost:3000/"), Credentials::default());
        let req = client.build(&ArtsyApi::Ping).unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/v1/system/ping");
    }

    #[test]
    fn missing_base_url_is_rejected() {
        let client = ArtsyClient::new(NoBase, Credentials::default());
        let err = client.build(&ArtsyApi::Ping).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        for bad in ["ftp://example.com", "example.com", "", "https://", "http://"] {
            let client = ArtsyClient::new(CustomBase(bad), Credentials::default());
            let err = client.build(&ArtsyApi::Ping).unwrap_err();
            assert!(matches!(err, ApiError::InvalidBaseUrl { .. }), "{bad:?}");
        }
    }

    struct Toggling(AtomicBool);

    impl ServerConfig for Toggling {
        fn use_staging(&self) -> bool {
            // Flips on every read; each build must observe the current value.
            self.0.fetch_xor(true, Ordering::Relaxed)
        }
    }

    #[test]
    fn environment_is_consulted_on_every_build() {
        let client = ArtsyClient::new(Toggling(AtomicBool::new(true)), Credentials::default());
        let first = client.build(&ArtsyApi::SystemTime).unwrap();
        let second = client.build(&ArtsyApi::SystemTime).unwrap();
        assert!(first.url.starts_with(STAGING_BASE_URL));
        assert!(second.url.starts_with(PRODUCTION_BASE_URL));
    }
}
