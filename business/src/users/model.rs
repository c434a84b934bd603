//! Wire types of the users collection.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Shown in place of a creation time the remote did not provide or we could not parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// One record of the remote users collection.
///
/// The client never edits these in place; every change goes through the remote and
/// a fresh list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub avatar: String,
    #[serde(default, deserialize_with = "deserialize_created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Creation time in the local timezone, e.g. `8/16/2025, 6:10:12 AM`.
    pub fn created_at_display(&self) -> String {
        match self.created_at {
            Some(created_at) => created_at
                .with_timezone(&Local)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string(),
            None => INVALID_DATE.to_owned(),
        }
    }
}

/// Body of POST and PUT requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserFields {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldsError {
    #[error("Please fill in both name and avatar fields!")]
    MissingField,
}

impl UserFields {
    /// Trim both inputs; either one being empty refuses the submission.
    pub fn new(name: &str, avatar: &str) -> Result<Self, FieldsError> {
        let name = name.trim();
        let avatar = avatar.trim();

        if name.is_empty() || avatar.is_empty() {
            return Err(FieldsError::MissingField);
        }

        Ok(Self {
            name: name.to_owned(),
            avatar: avatar.to_owned(),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// `null` reads as an empty string so one incomplete record cannot fail the list.
fn deserialize_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_created_at<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match raw {
        Some(serde_json::Value::String(text)) => DateTime::parse_from_rfc3339(&text)
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc)),
        // Epoch milliseconds, the other shape JSON APIs commonly use.
        Some(serde_json::Value::Number(millis)) => {
            millis.as_i64().and_then(DateTime::from_timestamp_millis)
        }
        _ => None,
    })
}
