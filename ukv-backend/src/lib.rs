//! # UKV Backend Adapters
//!
//! Purpose: define the backend capability contract and the concrete
//! adapters the façade dispatches to.
//!
//! ## Design Principles
//! 1. **One Seam**: every store implements [`Backend`]; callers never see
//!    adapter internals.
//! 2. **Handle per Operation**: adapters hold exactly one connection and
//!    are built to be created, used once, and dropped.
//! 3. **Verbatim Errors**: backend failures surface as [`StoreError`]
//!    without local retries or recovery.

mod backend;
mod error;
mod memory;
mod postgres;
mod redis;
mod resp;

pub use backend::Backend;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use redis::RedisStore;
