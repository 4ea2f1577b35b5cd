//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe an HTTP request as plain data. The core crate builds
//! `HttpRequest` values without ever touching the network — the caller (host)
//! is responsible for executing the actual I/O. Parameters are carried
//! separately from the URL: the transport decides how to encode them (query
//! string for GET/HEAD, JSON body for POST/PUT), so the URL never embeds a
//! query string itself.

use crate::params::ParamMap;

/// HTTP method for a request.
///
/// The registry only ever produces these four; descriptors without an
/// explicit override default to `Get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Head,
}

/// An HTTP request described as plain data.
///
/// Built fresh per call by [`ArtsyClient::build`](crate::ArtsyClient::build);
/// never cached, since descriptor arguments and the environment may vary
/// between calls. The caller executes this request against the network.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Absolute URL: environment-selected base concatenated with the
    /// descriptor's path. No query string.
    pub url: String,
    pub method: HttpMethod,
    /// Operation parameters, or `None` when the operation carries nothing.
    pub params: Option<ParamMap>,
    /// Whether the transport must attach an authentication credential.
    pub requires_auth: bool,
}
