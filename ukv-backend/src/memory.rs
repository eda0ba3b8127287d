//! # In-Memory Store
//!
//! Purpose: provide a cache-store-equivalent backend with no network,
//! used as the deterministic test double behind `test: true`.
//!
//! Clones share the same map, so sequential façade calls against clones
//! of one store observe each other's writes — the same visibility a real
//! backend gives separate short-lived connections.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::backend::Backend;
use crate::error::StoreResult;

/// Shared-map store with get/set/delete semantics matching the cache
/// store. There is a single implicit container, so `init` is a no-op.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[async_trait]
impl Backend for MemoryStore {
    async fn init(&mut self, _id: &str) -> StoreResult<()> {
        Ok(())
    }

    async fn get(&mut self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.inner.read().get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&mut self, key: &str) -> StoreResult<bool> {
        Ok(self.inner.write().remove(key).is_some())
    }
}
