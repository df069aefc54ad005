/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
[UPDATE]: 2026-08-06 Accept both ISO-8601 and SQL timestamp shapes in created_at
*/

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::HealthState;

/// A task record as returned by the server.
///
/// The server owns these records; the client never fabricates an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    /// Parse the creation timestamp.
    ///
    /// The backing store emits `YYYY-MM-DD HH:MM:SS` while a JSON layer
    /// emits ISO-8601; both shapes must order correctly.
    pub fn created_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }
}

/// Health snapshot from the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,
    pub timestamp: String,
}

impl HealthStatus {
    /// Synthesize an unhealthy snapshot stamped with the current time.
    ///
    /// Used when the health endpoint itself cannot be reached.
    pub fn unhealthy_now() -> Self {
        Self {
            status: HealthState::Unhealthy,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    None
}
