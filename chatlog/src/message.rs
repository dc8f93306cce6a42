//! Persisted chat message record and the JSON codec for the whole log.
//!
//! The wire shape is a JSON array of camelCase objects:
//! `{id, text, sender, timestamp, isSystem, isVolunteer?}`. There is no
//! schema version. `isVolunteer` may be absent and decodes as `false`.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

/// Sender name used by the seeded welcome message.
pub const SYSTEM_SENDER: &str = "Sistema";

/// Text of the single system message seeded into an empty log.
pub const WELCOME_TEXT: &str =
    "Bem-vindo ao chat de apoio! Este é um espaço seguro e anônimo. Como você está se sentindo hoje?";

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Milliseconds since the Unix epoch at creation. Not guaranteed unique.
    pub id: i64,
    pub text: String,
    /// Display alias of the author, or [`SYSTEM_SENDER`].
    pub sender: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub is_system: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_volunteer: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl Message {
    /// The system welcome message created when the log is first initialized.
    #[must_use]
    pub fn welcome(at: OffsetDateTime) -> Self {
        Self::build(WELCOME_TEXT, SYSTEM_SENDER, at, true, false)
    }

    /// A message authored from a student view.
    #[must_use]
    pub fn student(text: &str, sender: &str, at: OffsetDateTime) -> Self {
        Self::build(text, sender, at, false, false)
    }

    /// A message authored from a volunteer view.
    #[must_use]
    pub fn volunteer(text: &str, sender: &str, at: OffsetDateTime) -> Self {
        Self::build(text, sender, at, false, true)
    }

    fn build(text: &str, sender: &str, at: OffsetDateTime, is_system: bool, is_volunteer: bool) -> Self {
        Self {
            id: id_for(at),
            text: text.to_owned(),
            sender: sender.to_owned(),
            timestamp: at,
            is_system,
            is_volunteer,
        }
    }

    /// Whether `alias` authored this message. Aliases are not unique, so two
    /// sessions sharing an alias both match.
    #[must_use]
    pub fn is_from(&self, alias: &str) -> bool {
        !self.is_system && self.sender == alias
    }

    /// Render the timestamp as `HH:MM` in the given offset.
    #[must_use]
    pub fn clock_label(&self, offset: UtcOffset) -> String {
        clock_label(self.timestamp, offset)
    }
}

/// Message id derived from the creation instant, in epoch milliseconds.
#[must_use]
pub fn id_for(at: OffsetDateTime) -> i64 {
    i64::try_from(at.unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

/// Format an instant as a 24-hour, zero-padded `HH:MM` label.
#[must_use]
pub fn clock_label(at: OffsetDateTime, offset: UtcOffset) -> String {
    let local = at.to_offset(offset);
    format!("{:02}:{:02}", local.hour(), local.minute())
}

/// Decode a stored log value.
///
/// # Errors
///
/// Returns the `serde_json` error when `raw` is not a JSON array of messages.
pub fn decode_log(raw: &str) -> Result<Vec<Message>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Encode a log as the stored JSON array.
///
/// # Errors
///
/// Returns the `serde_json` error if a timestamp cannot be formatted as RFC 3339
/// (years outside `0..=9999`).
pub fn encode_log(messages: &[Message]) -> Result<String, serde_json::Error> {
    serde_json::to_string(messages)
}
