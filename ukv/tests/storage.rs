//! End-to-end façade scenarios against the in-memory test backend.

use serde_json::json;

use ukv::{storage, Action, Outcome, Request, StorageError};

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn request(action: &str, key: &str) -> Request {
    Request {
        action: Some(json!(action)),
        key: Some(key.to_string()),
        test: true,
        ..Request::default()
    }
}

#[tokio::test]
async fn returns_error_when_action_is_not_a_string() {
    init_tracing();
    let mut req = request("get", "a key");
    req.action = Some(json!({}));

    match storage(req).await {
        Err(StorageError::InvalidActionType(_)) => {}
        other => panic!("expected invalid action type, got {other:?}"),
    }
}

#[tokio::test]
async fn returns_error_for_unsupported_action() {
    init_tracing();
    let mut req = request("get", "a key");
    req.action = Some(json!("foo"));

    match storage(req).await {
        Err(StorageError::UnsupportedAction(tag)) => assert_eq!(tag, "foo"),
        other => panic!("expected unsupported action, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_request_returns_the_action_catalog() {
    init_tracing();
    let outcome = storage(Request::default()).await.expect("catalog");

    match outcome {
        Outcome::Catalog(actions) => {
            assert_eq!(
                actions,
                &[Action::Get, Action::Set, Action::Delete, Action::Init]
            );
        }
        other => panic!("expected catalog, got {other:?}"),
    }
}

#[tokio::test]
async fn sets_and_gets_a_value() {
    init_tracing();
    let mut set = request("set", "roundtrip key");
    set.value = Some(json!("a value"));
    assert_eq!(storage(set).await.expect("set"), Outcome::Done);

    let outcome = storage(request("get", "roundtrip key")).await.expect("get");
    assert_eq!(outcome, Outcome::Value(Some(json!("a value"))));
}

#[tokio::test]
async fn deletes_a_value() {
    init_tracing();
    let mut set = request("set", "delete key");
    set.value = Some(json!("a value"));
    storage(set).await.expect("set");

    assert_eq!(
        storage(request("delete", "delete key")).await.expect("delete"),
        Outcome::Done
    );

    let outcome = storage(request("get", "delete key")).await.expect("get");
    assert_eq!(outcome, Outcome::Value(None));
}

#[tokio::test]
async fn structured_value_survives_the_round_trip() {
    init_tracing();
    let value = json!({
        "string": "s",
        "number": 42,
        "object": {"nested": {"flag": true}},
        "array": [1, 2, 3],
    });

    let mut set = request("set", "structured key");
    set.value = Some(value.clone());
    storage(set).await.expect("set");

    let outcome = storage(request("get", "structured key")).await.expect("get");
    assert_eq!(outcome, Outcome::Value(Some(value)));
}

#[tokio::test]
async fn honors_explicit_host_and_port_through_a_full_chain() {
    init_tracing();
    // The same sequential chain as the callers use: set, get, delete, get.
    let with_target = |action: &str| {
        let mut req = request(action, "chain key");
        req.host = Some("localhost".to_string());
        req.port = Some(6379);
        req
    };

    let mut set = with_target("set");
    set.value = Some(json!("a value"));
    storage(set).await.expect("set");

    let outcome = storage(with_target("get")).await.expect("get");
    assert_eq!(outcome, Outcome::Value(Some(json!("a value"))));

    storage(with_target("delete")).await.expect("delete");

    let outcome = storage(with_target("get")).await.expect("get after delete");
    assert_eq!(outcome, Outcome::Value(None));
}

#[tokio::test]
async fn get_of_never_set_key_is_absent_not_error() {
    init_tracing();
    let outcome = storage(request("get", "never set key")).await.expect("get");
    assert_eq!(outcome, Outcome::Value(None));
}

#[tokio::test]
async fn overwrites_keep_the_latest_value() {
    init_tracing();
    for value in [json!(1), json!({"v": 2}), json!([3])] {
        let mut set = request("set", "overwrite key");
        set.value = Some(value);
        storage(set).await.expect("set");
    }

    let outcome = storage(request("get", "overwrite key")).await.expect("get");
    assert_eq!(outcome, Outcome::Value(Some(json!([3]))));
}
