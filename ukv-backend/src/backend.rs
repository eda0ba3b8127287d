//! The backend capability contract.

use async_trait::async_trait;

use crate::error::StoreResult;

/// Capability contract every concrete store satisfies.
///
/// A `Backend` value is a live handle scoped to one façade operation:
/// created, used once, and dropped. Stored values are the codec's text
/// form; adapters never interpret them.
#[async_trait]
pub trait Backend: Send {
    /// Ensures the storage container named by `id` exists, idempotently.
    ///
    /// Completing `init` never touches the container's prior contents.
    async fn init(&mut self, id: &str) -> StoreResult<()>;

    /// Fetches the stored text for `key`. `None` means no value.
    async fn get(&mut self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Returns whether a value was actually removed.
    async fn delete(&mut self, key: &str) -> StoreResult<bool>;
}
