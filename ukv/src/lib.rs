//! # UKV — Uniform Key-Value Access Layer
//!
//! Purpose: normalize get/set/delete/init over interchangeable backing
//! stores behind one request shape and one entry point.
//!
//! ## Design Principles
//! 1. **Facade Pattern**: [`storage`] hides validation, adapter
//!    selection, and the value codec behind a single call.
//! 2. **Validate First**: no backend I/O happens for invalid input.
//! 3. **Handle per Operation**: backends are connected, used once, and
//!    dropped; nothing is shared across calls except configuration
//!    defaults and the test store.
//! 4. **Closed Adapter Set**: backends are enum variants matched
//!    exhaustively, so extension is a compile-checked change.
//!
//! ## Usage
//!
//! ```no_run
//! use serde_json::json;
//! use ukv::{storage, Outcome, Request};
//!
//! # async fn demo() -> Result<(), ukv::StorageError> {
//! let ack = storage(Request {
//!     action: Some(json!("set")),
//!     key: Some("greeting".to_string()),
//!     value: Some(json!({"text": "hello", "count": 1})),
//!     ..Request::default()
//! })
//! .await?;
//! assert_eq!(ack, Outcome::Done);
//! # Ok(())
//! # }
//! ```

mod dispatch;
mod error;
mod factory;
mod validate;

pub use dispatch::storage;
pub use error::{StorageError, StorageResult};
pub use factory::{ConnectConfig, DEFAULT_HOST, DEFAULT_PORT};

// Re-export the shared types so callers depend on one crate.
pub use ukv_common::{codec, Action, Medium, Outcome, Request};
