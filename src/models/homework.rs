//! Homework entries as reported by the review API.

use serde_json::Value;

/// One submission's review state, read leniently from the payload.
///
/// Fields stay optional here; presence is enforced by
/// [`parse_status`](crate::pipeline::parse_status).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeworkEntry {
    pub name: Option<String>,
    pub status: Option<String>,
}

impl HomeworkEntry {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
        }
    }

    /// Build an entry from a raw JSON object. Null or absent fields become
    /// `None`; non-string values are kept in their JSON rendering.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| match value.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Self {
            name: field("homework_name"),
            status: field("status"),
        }
    }
}

/// Result of validating a status payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeworkBatch {
    /// `homeworks` was an empty list; nothing to report this cycle
    Empty,
    /// At least one entry, in API order
    Entries(Vec<HomeworkEntry>),
}

impl HomeworkBatch {
    /// The entry tracked by the bot. Only the first one is ever inspected.
    pub fn first(&self) -> Option<&HomeworkEntry> {
        match self {
            HomeworkBatch::Empty => None,
            HomeworkBatch::Entries(entries) => entries.first(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            HomeworkBatch::Empty => 0,
            HomeworkBatch::Entries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
