use serde::Serialize;
use strum::{Display, IntoStaticStr};

use crate::snapshot::{CharacterSnapshot, ItemSnapshot, MessagePayload};

/// Outcome of a request.
///
/// Callers branch on this value only, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    /// Unknown resource root, or the referenced entity does not exist
    NotFound,
    /// Known resource with a malformed argument set
    Invalid,
    /// Unexpected internal failure
    Error,
}

/// Structured response body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Character(CharacterSnapshot),
    Item(ItemSnapshot),
    Message(MessagePayload),
}

/// Status plus optional payload.
///
/// A `Success` response always carries a payload; the constructors are the
/// only way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    status: ResponseStatus,
    payload: Option<Payload>,
}

impl Response {
    pub fn success(payload: Payload) -> Self {
        Self {
            status: ResponseStatus::Success,
            payload: Some(payload),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: ResponseStatus::NotFound,
            payload: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Invalid,
            payload: Some(Payload::Message(MessagePayload::new(message))),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            payload: Some(Payload::Message(MessagePayload::new(message))),
        }
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Character snapshot, if this is a successful `character/*` response
    pub fn character(&self) -> Option<&CharacterSnapshot> {
        match &self.payload {
            Some(Payload::Character(snapshot)) => Some(snapshot),
            _ => None,
        }
    }

    /// Item snapshot, if this is a successful `items/*` response
    pub fn item(&self) -> Option<&ItemSnapshot> {
        match &self.payload {
            Some(Payload::Item(snapshot)) => Some(snapshot),
            _ => None,
        }
    }

    /// Explanation carried by `invalid` and `error` responses
    pub fn message(&self) -> Option<&str> {
        match &self.payload {
            Some(Payload::Message(message)) => Some(&message.message),
            _ => None,
        }
    }
}

impl From<CharacterSnapshot> for Payload {
    fn from(snapshot: CharacterSnapshot) -> Self {
        Self::Character(snapshot)
    }
}

impl From<ItemSnapshot> for Payload {
    fn from(snapshot: ItemSnapshot) -> Self {
        Self::Item(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(ResponseStatus::NotFound).unwrap(),
            json!("not_found")
        );
        assert_eq!(ResponseStatus::Success.to_string(), "success");
        assert_eq!(ResponseStatus::Invalid.to_string(), "invalid");
        assert_eq!(ResponseStatus::Error.to_string(), "error");
    }

    #[test]
    fn test_not_found_has_null_payload() {
        let response = Response::not_found();
        assert!(response.payload().is_none());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "status": "not_found", "payload": null })
        );
    }

    #[test]
    fn test_invalid_carries_message() {
        let response = Response::invalid("bad argument");
        assert_eq!(response.status(), ResponseStatus::Invalid);
        assert_eq!(response.message(), Some("bad argument"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "status": "invalid", "payload": { "message": "bad argument" } })
        );
    }

    #[test]
    fn test_error_is_not_success() {
        let response = Response::error("source fault");
        assert!(!response.is_success());
        assert!(response.character().is_none());
        assert_eq!(response.message(), Some("source fault"));
    }
}
