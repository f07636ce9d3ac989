//! Wire Models
//!
//! Records and request payloads exchanged with the remote store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A named grouping of todos (matches the `/list` resource)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub title: String,
    /// Assigned by the store on insert; unreadable values decode as `None`
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// Denormalized copy kept by the store; never read locally
    #[serde(default)]
    pub todos: Vec<Todo>,
}

/// A single task (matches the `/todo` resource)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub list_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub completed: bool,
}

/// RFC 3339 strings, or Unix seconds/milliseconds; anything else is `None`
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(|ts| {
            // Values past year 5138 in seconds are taken as milliseconds
            if ts.abs() >= 100_000_000_000 {
                DateTime::from_timestamp_millis(ts)
            } else {
                DateTime::from_timestamp(ts, 0)
            }
        }),
        _ => None,
    };
    Ok(parsed)
}

// ========================
// Request Payloads
// ========================

/// Insert payload for `POST /list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewList {
    pub title: String,
}

impl NewList {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

/// Insert payload for `POST /todo`
///
/// `completed` is private and always `false` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub list_id: String,
    pub deadline: String,
    pub content: String,
    completed: bool,
}

impl NewTodo {
    pub fn new(
        title: impl Into<String>,
        list_id: impl Into<String>,
        deadline: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            list_id: list_id.into(),
            deadline: deadline.into(),
            content: content.into(),
            completed: false,
        }
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// Partial update payload for `PUT /todo/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TodoPatch {
    pub completed: bool,
}
