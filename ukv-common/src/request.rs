//! # Request and Response Types
//!
//! Core data types for the uniform storage request: the recognized action
//! and medium tags, the request shape itself, and the dispatch outcome.
//!
//! ## Design Principles
//!
//! 1. **Loose Action Typing**: `Request::action` is raw JSON so that a
//!    present-but-not-a-string action stays representable and is rejected
//!    by validation rather than by deserialization.
//! 2. **Closed Tag Sets**: `Action` and `Medium` are enums; dispatch over
//!    them is exhaustive, so adding a backend is a compile-checked change.
//! 3. **Transport-Ready**: every type serializes with serde so requests
//!    survive a text-oriented transport unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The requested storage operation.
///
/// Tags are lowercase and case-sensitive: `"GET"` is not a recognized
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Get,
    Set,
    Delete,
    Init,
}

impl Action {
    /// Catalog of every supported action, in the order they are documented.
    pub const ALL: [Action; 4] = [Action::Get, Action::Set, Action::Delete, Action::Init];

    /// Parses an action tag. Returns `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Action> {
        match tag {
            "get" => Some(Action::Get),
            "set" => Some(Action::Set),
            "delete" => Some(Action::Delete),
            "init" => Some(Action::Init),
            _ => None,
        }
    }

    /// Returns the wire tag for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Get => "get",
            Action::Set => "set",
            Action::Delete => "delete",
            Action::Init => "init",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concrete backend selected by an `init` request.
///
/// This is the whole adapter registry: one variant per adapter, matched
/// exhaustively at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    Redis,
    Postgresql,
}

impl Medium {
    /// Parses a medium tag. Returns `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Medium> {
        match tag {
            "redis" => Some(Medium::Redis),
            "postgresql" => Some(Medium::Postgresql),
            _ => None,
        }
    }

    /// Returns the wire tag for this medium.
    pub fn as_str(&self) -> &'static str {
        match self {
            Medium::Redis => "redis",
            Medium::Postgresql => "postgresql",
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The uniform storage request.
///
/// Every operation goes through this one shape. Only `action` is
/// interpreted during validation; missing keys or values surface later,
/// when the operation is attempted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Requested action tag. Raw JSON: a non-string here is a validation
    /// error, not a deserialization failure. Absent means "describe
    /// yourself" and yields the action catalog.
    pub action: Option<Value>,
    /// Identifier for the value being read, written, or removed.
    pub key: Option<String>,
    /// Value to store. Required for `set`; arbitrary structured data.
    pub value: Option<Value>,
    /// Connection host override. Only honored together with `port`.
    pub host: Option<String>,
    /// Connection port override. Only honored together with `host`.
    pub port: Option<u16>,
    /// Route the operation to the shared in-memory store instead of a
    /// live backend.
    pub test: bool,
    /// Backend selection tag for `init`.
    pub medium: Option<String>,
    /// Storage-container identifier used by `init`.
    pub id: Option<String>,
}

/// Successful result of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The supported-actions catalog, returned for empty requests.
    Catalog(&'static [Action]),
    /// Decoded value for `get`; `None` is the absent-value sentinel.
    Value(Option<Value>),
    /// Acknowledgment for `set`, `delete`, and `init`.
    Done,
}
