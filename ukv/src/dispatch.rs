//! # Dispatcher
//!
//! Purpose: the single entry point. Validate the request, route it to
//! the right backend operation, and run the value codec around the
//! backend call.
//!
//! ## Contract
//! - An empty request (no action) returns the action catalog; nothing is
//!   validated and no backend is touched.
//! - Validation failures return before any backend I/O, so invalid input
//!   has no partial side effects.
//! - Every get/set/delete opens exactly one backend handle, awaits the
//!   reply, and drops the handle before returning. Handles never carry
//!   state across calls.
//! - `init` resolves the medium against the closed adapter set; an
//!   absent or unknown medium is an error, not a silent no-op.

use tracing::debug;

use ukv_backend::{Backend, PostgresStore};
use ukv_common::{codec, Action, Medium, Outcome, Request};

use crate::error::{StorageError, StorageResult};
use crate::factory::{self, ConnectConfig};
use crate::validate::validate;

/// Dispatches one storage request.
///
/// Completes exactly once with either the operation's outcome or the
/// first error on the path; backend errors arrive unmodified.
pub async fn storage(request: Request) -> StorageResult<Outcome> {
    let Some(raw_action) = request.action.as_ref() else {
        debug!("empty request, returning action catalog");
        return Ok(Outcome::Catalog(&Action::ALL));
    };

    let action = validate(raw_action)?;
    debug!(%action, key = request.key.as_deref().unwrap_or_default(), "dispatching");

    match action {
        Action::Set => set_value(&request).await,
        Action::Get => get_value(&request).await,
        Action::Delete => delete_value(&request).await,
        Action::Init => init_backend(&request).await,
    }
}

/// Save a value under its key.
async fn set_value(request: &Request) -> StorageResult<Outcome> {
    let key = require_key(request, Action::Set)?;
    let stored = codec::encode(request.value.as_ref().unwrap_or(&serde_json::Value::Null))?;

    let mut handle = factory::create(&ConnectConfig::from_request(request)).await?;
    handle.set(key, &stored).await?;
    Ok(Outcome::Done)
}

/// Return the value previously saved under the key.
async fn get_value(request: &Request) -> StorageResult<Outcome> {
    let key = require_key(request, Action::Get)?;

    let mut handle = factory::create(&ConnectConfig::from_request(request)).await?;
    let stored = handle.get(key).await?;
    let value = codec::decode(stored.as_deref())?;
    Ok(Outcome::Value(value))
}

/// Remove the value associated with the key.
async fn delete_value(request: &Request) -> StorageResult<Outcome> {
    let key = require_key(request, Action::Delete)?;

    let mut handle = factory::create(&ConnectConfig::from_request(request)).await?;
    handle.delete(key).await?;
    Ok(Outcome::Done)
}

/// Ensure a backend's storage container exists.
async fn init_backend(request: &Request) -> StorageResult<Outcome> {
    let tag = request.medium.as_deref().unwrap_or_default();
    let medium = Medium::parse(tag)
        .ok_or_else(|| StorageError::UnsupportedMedium(tag.to_string()))?;
    let id = request.id.as_deref().unwrap_or_default();

    match medium {
        Medium::Redis => {
            let mut handle = factory::create(&ConnectConfig::from_request(request)).await?;
            handle.init(id).await?;
        }
        Medium::Postgresql => {
            let mut store = PostgresStore::connect_from_env().await?;
            store.init(id).await?;
        }
    }

    Ok(Outcome::Done)
}

fn require_key(request: &Request, action: Action) -> StorageResult<&str> {
    request
        .key
        .as_deref()
        .ok_or(StorageError::MissingKey(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_request(action: &str, key: &str) -> Request {
        Request {
            action: Some(json!(action)),
            key: Some(key.to_string()),
            test: true,
            ..Request::default()
        }
    }

    #[tokio::test]
    async fn missing_key_fails_at_point_of_use() {
        let request = Request {
            action: Some(json!("get")),
            test: true,
            ..Request::default()
        };
        assert!(matches!(
            storage(request).await,
            Err(StorageError::MissingKey(Action::Get))
        ));
    }

    #[tokio::test]
    async fn set_without_value_stores_null() {
        let request = test_request("set", "dispatch null key");
        storage(request).await.expect("set");

        let outcome = storage(test_request("get", "dispatch null key"))
            .await
            .expect("get");
        assert_eq!(outcome, Outcome::Value(Some(json!(null))));
    }

    #[tokio::test]
    async fn unknown_medium_is_rejected_before_any_backend_work() {
        let request = Request {
            action: Some(json!("init")),
            medium: Some("cassandra".to_string()),
            test: true,
            ..Request::default()
        };
        match storage(request).await {
            Err(StorageError::UnsupportedMedium(tag)) => assert_eq!(tag, "cassandra"),
            other => panic!("expected unsupported medium, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_medium_is_rejected() {
        let request = Request {
            action: Some(json!("init")),
            test: true,
            ..Request::default()
        };
        assert!(matches!(
            storage(request).await,
            Err(StorageError::UnsupportedMedium(_))
        ));
    }

    #[tokio::test]
    async fn init_on_test_store_is_idempotent() {
        let request = Request {
            action: Some(json!("init")),
            medium: Some("redis".to_string()),
            id: Some("sessions".to_string()),
            test: true,
            ..Request::default()
        };
        assert_eq!(storage(request.clone()).await.expect("init"), Outcome::Done);
        assert_eq!(storage(request).await.expect("init again"), Outcome::Done);
    }
}
