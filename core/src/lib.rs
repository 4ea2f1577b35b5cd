//! Declarative endpoint catalog and request builder for the Artsy auction
//! API.
//!
//! # Overview
//! Builds `HttpRequest` values without touching the network (host-does-IO
//! pattern). Every API operation is one variant of a closed descriptor enum;
//! the registry answers path, method, parameters, and the credential
//! requirement for each, and `ArtsyClient::build` assembles the
//! transport-agnostic request. The caller executes the actual HTTP
//! round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - Two disjoint registries: [`ArtsyApi`] (session bootstrap, public reads,
//!   account creation) and [`ArtsyAuthenticatedApi`] (everything scoped to
//!   "me"), joined by the [`Endpoint`] trait.
//! - The staging/production switch and the client key/secret are explicit
//!   collaborators ([`ServerConfig`], [`Credentials`]), threaded in by the
//!   caller rather than read from ambient state.
//! - Parameters are a closed value union ([`ParamValue`]) so wire quirks
//!   like string-`"true"` vs boolean-`true` survive untouched.
//! - Each descriptor maps to a compiled-in sample payload
//!   ([`fixtures::sample_data`]) for offline execution.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod params;

pub use client::{
    ArtsyClient, Credentials, Environment, ServerConfig, PRODUCTION_BASE_URL, STAGING_BASE_URL,
};
pub use endpoints::{ArtsyApi, ArtsyAuthenticatedApi, Endpoint};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest};
pub use params::{param_map, ParamMap, ParamValue};
