//! Typed request payloads.
//!
//! Fields are deserialized as `Option` so that an absent key and an explicit
//! `null` both surface as a validation error rather than a JSON rejection.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Payload of `POST /messages`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NewMessage {
    pub body: Option<String>,
    pub username: Option<String>,
}

/// A create request with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNewMessage {
    pub body: String,
    pub username: String,
}

impl NewMessage {
    pub fn validate(self) -> Result<ValidNewMessage> {
        match (self.body, self.username) {
            (Some(body), Some(username)) => Ok(ValidNewMessage { body, username }),
            _ => Err(Error::Validation(Error::MISSING_BODY_AND_USERNAME)),
        }
    }
}

/// Payload of `PATCH /messages/{id}`. Only `body` is mutable.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MessagePatch {
    pub body: Option<String>,
}

impl MessagePatch {
    pub fn validate(self) -> Result<String> {
        self.body.ok_or(Error::Validation(Error::MISSING_BODY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_requires_both_fields() {
        let missing_username = NewMessage {
            body: Some("hi".into()),
            username: None,
        };
        let err = missing_username.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: body and username");

        let missing_body = NewMessage {
            body: None,
            username: Some("ada".into()),
        };
        assert!(matches!(missing_body.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn empty_strings_are_present() {
        let valid = NewMessage {
            body: Some(String::new()),
            username: Some(String::new()),
        }
        .validate()
        .unwrap();
        assert_eq!(valid.body, "");
    }

    #[test]
    fn patch_ignores_unknown_fields() {
        let patch: MessagePatch =
            serde_json::from_str(r#"{"body": "edited", "username": "mallory"}"#).unwrap();
        assert_eq!(patch.validate().unwrap(), "edited");
    }

    #[test]
    fn null_body_is_missing() {
        let patch: MessagePatch = serde_json::from_str(r#"{"body": null}"#).unwrap();
        assert_eq!(
            patch.validate().unwrap_err().to_string(),
            "Missing required field: body"
        );
    }
}
