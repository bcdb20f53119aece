//! Core types for the portfolio app

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One portfolio project as served by a data source.
///
/// Immutable once loaded; the renderer only reads it. `id` is unique
/// within a load and `tags` keeps its display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique identifier within a load
    pub id: u64,
    /// Project title
    pub title: String,
    /// Short description shown on the card
    pub description: String,
    /// Image URI (may be a placeholder)
    pub image: String,
    /// Technology tags, display order significant
    pub tags: Vec<String>,
    /// Link to the live demo
    #[serde(rename = "liveUrl")]
    pub live_url: String,
    /// Link to the source code
    #[serde(rename = "codeUrl")]
    pub code_url: String,
}

/// Contact form payload sent to a data source.
///
/// All three fields are required non-blank; the form validates before
/// a submission is attempted, the data source does not re-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A submitted message as stored by the mock data source.
///
/// Never read back by the app; kept so tests can observe submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Submission time, set when the record is appended
    pub timestamp: DateTime<Utc>,
}

impl MessageRecord {
    /// Create a record from a validated payload, stamped with the current time
    pub fn new(msg: NewMessage) -> Self {
        Self {
            name: msg.name,
            email: msg.email,
            message: msg.message,
            timestamp: Utc::now(),
        }
    }
}

/// Acknowledgment returned by a successful message submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub success: bool,
    /// Server-generated identifier (epoch milliseconds in the mock variant)
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_record_json_field_names() {
        let json = r##"{
            "id": 7,
            "title": "Weather App",
            "description": "Real-time weather",
            "image": "/api/placeholder/600/400",
            "tags": ["JavaScript", "API", "CSS"],
            "liveUrl": "#",
            "codeUrl": "#"
        }"##;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.tags, vec!["JavaScript", "API", "CSS"]);
        assert_eq!(record.live_url, "#");
        assert_eq!(record.code_url, "#");
    }

    #[test]
    fn test_message_record_carries_payload() {
        let record = MessageRecord::new(NewMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "hello".to_string(),
        });
        assert_eq!(record.name, "Ada");
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.message, "hello");
    }

    #[test]
    fn test_tags_may_be_empty() {
        let json = r##"{
            "id": 1,
            "title": "t",
            "description": "d",
            "image": "i",
            "tags": [],
            "liveUrl": "#",
            "codeUrl": "#"
        }"##;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
    }
}
