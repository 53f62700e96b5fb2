//! Wire format of inline-button payloads for the delete workflow.
//!
//! ```text
//! delete|<kind>|<token>
//! confirm|<kind>|<token>
//! cancel
//! ```
//!
//! The whole pending deletion travels inside the button, so the server keeps
//! no per-user state between the two phases.

use std::{fmt, str::FromStr};

use crate::{domain::MediaKind, errors::Error};

const DELIMITER: char = '|';
const DELETE: &str = "delete";
const CONFIRM: &str = "confirm";
const CANCEL: &str = "cancel";

/// Telegram rejects callback data longer than this many bytes.
pub const MAX_BUTTON_DATA_BYTES: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlPayload {
    /// "Delete" pressed under a listed file: ask for confirmation.
    Delete { kind: MediaKind, token: String },
    /// "Yes" pressed on the confirmation prompt.
    Confirm { kind: MediaKind, token: String },
    /// "No" pressed on the confirmation prompt.
    Cancel,
}

impl ControlPayload {
    pub fn delete(kind: MediaKind, token: impl Into<String>) -> Self {
        ControlPayload::Delete {
            kind,
            token: token.into(),
        }
    }

    pub fn confirm(kind: MediaKind, token: impl Into<String>) -> Self {
        ControlPayload::Confirm {
            kind,
            token: token.into(),
        }
    }

    /// Encoded payload, or `None` when it is too long to ride on a button.
    pub fn to_button_data(&self) -> Option<String> {
        let data = self.to_string();
        (data.len() <= MAX_BUTTON_DATA_BYTES).then_some(data)
    }
}

impl fmt::Display for ControlPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlPayload::Delete { kind, token } => {
                write!(f, "{DELETE}{DELIMITER}{kind}{DELIMITER}{token}")
            }
            ControlPayload::Confirm { kind, token } => {
                write!(f, "{CONFIRM}{DELIMITER}{kind}{DELIMITER}{token}")
            }
            ControlPayload::Cancel => f.write_str(CANCEL),
        }
    }
}

impl FromStr for ControlPayload {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == CANCEL {
            return Ok(ControlPayload::Cancel);
        }

        let malformed = || Error::MalformedControlPayload(s.to_string());

        let mut parts = s.splitn(3, DELIMITER);
        let action = parts.next().ok_or_else(malformed)?;
        let kind = parts
            .next()
            .and_then(|k| k.parse::<MediaKind>().ok())
            .ok_or_else(malformed)?;
        let token = parts
            .next()
            .filter(|t| !t.is_empty())
            .ok_or_else(malformed)?
            .to_string();

        match action {
            DELETE => Ok(ControlPayload::Delete { kind, token }),
            CONFIRM => Ok(ControlPayload::Confirm { kind, token }),
            _ => Err(malformed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<ControlPayload, Error> {
        s.parse()
    }

    #[test]
    fn parses_the_three_forms() {
        assert_eq!(
            parse("delete|document|BQACAgI").unwrap(),
            ControlPayload::delete(MediaKind::Document, "BQACAgI")
        );
        assert_eq!(
            parse("confirm|Photo|abc").unwrap(),
            ControlPayload::confirm(MediaKind::Photo, "abc")
        );
        assert_eq!(parse("cancel").unwrap(), ControlPayload::Cancel);
    }

    #[test]
    fn encodes_kind_in_lowercase() {
        assert_eq!(
            ControlPayload::delete(MediaKind::Video, "v1").to_string(),
            "delete|video|v1"
        );
        assert_eq!(
            ControlPayload::confirm(MediaKind::Photo, "ph1").to_string(),
            "confirm|photo|ph1"
        );
        assert_eq!(ControlPayload::Cancel.to_string(), "cancel");
    }

    #[test]
    fn rejects_malformed_payloads() {
        for bad in [
            "",
            "delete",
            "delete|Document",
            "delete|document|",
            "confirm|audio|abc",
            "remove|photo|abc",
            "cancel|photo|abc",
            "Cancel",
            " cancel",
            "delete:photo:abc",
        ] {
            match parse(bad) {
                Err(Error::MalformedControlPayload(raw)) => assert_eq!(raw, bad),
                other => panic!("expected malformed for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn token_keeps_everything_after_the_kind() {
        assert_eq!(
            parse("confirm|document|a|b").unwrap(),
            ControlPayload::confirm(MediaKind::Document, "a|b")
        );
    }

    #[test]
    fn button_data_respects_the_size_limit() {
        // "delete|document|" is 16 bytes, "confirm|document|" is 17.
        let token = "x".repeat(48);
        assert_eq!(
            ControlPayload::delete(MediaKind::Document, token.as_str()).to_button_data(),
            Some(format!("delete|document|{token}"))
        );
        assert_eq!(
            ControlPayload::confirm(MediaKind::Document, token.as_str()).to_button_data(),
            None
        );
        assert_eq!(
            ControlPayload::Cancel.to_button_data().as_deref(),
            Some("cancel")
        );
    }
}
