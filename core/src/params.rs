//! Operation parameter values.
//!
//! # Design
//! Parameters are a small closed value union rather than `serde_json::Value`:
//! the registry only ever produces strings, integers, booleans, and one level
//! of nesting (the `location` object), and the closed enum keeps accidental
//! coercion out. The API is inconsistent about `is_auction` — one operation
//! sends the string `"true"`, another the boolean `true` — and that
//! distinction has to survive all the way to the wire, so `String("true")`
//! and `Bool(true)` must never compare equal or serialize the same.
//!
//! `ParamValue` serializes untagged, so a transport can hand a `ParamMap`
//! straight to a JSON encoder for POST/PUT bodies.

use std::collections::BTreeMap;

use serde::Serialize;

/// Key/value parameter mapping for one operation. Ordering is irrelevant to
/// the API; `BTreeMap` keeps iteration deterministic for tests.
pub type ParamMap = BTreeMap<String, ParamValue>;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Int(i64),
    Bool(bool),
    /// Nested object, e.g. `location: { postal_code: ... }`.
    Object(ParamMap),
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::String(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::String(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<ParamMap> for ParamValue {
    fn from(v: ParamMap) -> Self {
        ParamValue::Object(v)
    }
}

/// Build a `ParamMap` from `(key, value)` pairs.
pub fn param_map<const N: usize>(entries: [(&str, ParamValue); N]) -> ParamMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
