/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Body for creating a task.
///
/// `description` serializes as an explicit `null` when absent; the server
/// treats both the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTaskRequest {
    pub title: String,
    pub description: Option<String>,
}

impl NewTaskRequest {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_serializes_as_null() {
        let request = NewTaskRequest::new("water plants", None);
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["title"], "water plants");
        assert!(json["description"].is_null());
    }
}
