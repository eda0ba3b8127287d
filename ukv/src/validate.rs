//! # Request Validation
//!
//! Purpose: check that a request names a supported action before any
//! backend work happens.
//!
//! Only the action is judged here. Missing keys or values are not
//! validation errors; they surface later, when the operation is
//! attempted. Empty requests never reach this module — the dispatcher
//! answers them with the action catalog first.

use serde_json::Value;

use ukv_common::Action;

use crate::error::{StorageError, StorageResult};

/// Validates the raw action field and resolves it to an [`Action`].
pub(crate) fn validate(raw_action: &Value) -> StorageResult<Action> {
    let tag = match raw_action.as_str() {
        Some(tag) => tag,
        None => return Err(StorageError::InvalidActionType(raw_action.clone())),
    };

    Action::parse(tag).ok_or_else(|| StorageError::UnsupportedAction(tag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_every_supported_tag() {
        assert_eq!(validate(&json!("get")).unwrap(), Action::Get);
        assert_eq!(validate(&json!("set")).unwrap(), Action::Set);
        assert_eq!(validate(&json!("delete")).unwrap(), Action::Delete);
        assert_eq!(validate(&json!("init")).unwrap(), Action::Init);
    }

    #[test]
    fn non_string_action_is_invalid_type() {
        for raw in [json!({}), json!(42), json!(["get"]), json!(true), json!(null)] {
            assert!(
                matches!(validate(&raw), Err(StorageError::InvalidActionType(_))),
                "accepted {raw}"
            );
        }
    }

    #[test]
    fn unknown_tag_is_unsupported() {
        match validate(&json!("foo")) {
            Err(StorageError::UnsupportedAction(tag)) => assert_eq!(tag, "foo"),
            other => panic!("expected unsupported action, got {other:?}"),
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!(matches!(
            validate(&json!("GET")),
            Err(StorageError::UnsupportedAction(_))
        ));
    }

    #[test]
    fn validation_errors_are_flagged() {
        assert!(validate(&json!(1)).unwrap_err().is_validation());
        assert!(validate(&json!("nope")).unwrap_err().is_validation());
    }
}
