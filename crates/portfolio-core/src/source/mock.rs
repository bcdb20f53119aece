//! In-memory mock data source.
//!
//! Simulates the backend: a fixed delay before every resolution, a
//! seeded project collection and a growable message list. A collection
//! can be absent to model a misconfigured store, in which case both
//! operations fail with `CollectionNotFound` after the same delay.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use crate::error::{PortfolioError, PortfolioResult};
use crate::source::DataSource;
use crate::types::{MessageRecord, NewMessage, ProjectRecord, SubmitAck};

/// Simulated network delay for project reads
pub const FETCH_DELAY: Duration = Duration::from_millis(800);

/// Simulated network delay for message writes
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1200);

/// The three canonical seed projects
pub fn seed_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: 1,
            title: "E-commerce Website".to_string(),
            description: "A fully responsive e-commerce platform with shopping cart functionality"
                .to_string(),
            image: "/api/placeholder/600/400".to_string(),
            tags: vec![
                "HTML".to_string(),
                "CSS".to_string(),
                "JavaScript".to_string(),
                "Node.js".to_string(),
            ],
            live_url: "#".to_string(),
            code_url: "#".to_string(),
        },
        ProjectRecord {
            id: 2,
            title: "Weather App".to_string(),
            description: "Real-time weather application using OpenWeather API".to_string(),
            image: "/api/placeholder/600/400".to_string(),
            tags: vec!["JavaScript".to_string(), "API".to_string(), "CSS".to_string()],
            live_url: "#".to_string(),
            code_url: "#".to_string(),
        },
        ProjectRecord {
            id: 3,
            title: "Task Manager".to_string(),
            description: "A productivity application for managing daily tasks with drag-and-drop UI"
                .to_string(),
            image: "/api/placeholder/600/400".to_string(),
            tags: vec![
                "React".to_string(),
                "MongoDB".to_string(),
                "Express".to_string(),
            ],
            live_url: "#".to_string(),
            code_url: "#".to_string(),
        },
    ]
}

/// In-memory repository behind the mock data source.
///
/// Owned by whoever builds it and passed in explicitly, not a shared
/// static. `None` collections model a misconfigured store.
pub struct MockStore {
    projects: Option<Vec<ProjectRecord>>,
    messages: Option<Mutex<Vec<MessageRecord>>>,
}

impl MockStore {
    /// Store seeded with the three canonical projects
    pub fn new() -> Self {
        Self::with_projects(seed_projects())
    }

    /// Store with a caller-supplied project collection
    pub fn with_projects(projects: Vec<ProjectRecord>) -> Self {
        Self {
            projects: Some(projects),
            messages: Some(Mutex::new(Vec::new())),
        }
    }

    /// Misconfigured store: both collections absent
    pub fn broken() -> Self {
        Self {
            projects: None,
            messages: None,
        }
    }

    /// Snapshot of the submitted messages (empty if the collection is absent)
    pub fn messages(&self) -> Vec<MessageRecord> {
        self.messages
            .as_ref()
            .map(|m| m.lock().clone())
            .unwrap_or_default()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for MockStore {
    async fn fetch_projects(&self) -> PortfolioResult<Vec<ProjectRecord>> {
        tokio::time::sleep(FETCH_DELAY).await;
        match &self.projects {
            Some(projects) => Ok(projects.clone()),
            None => Err(PortfolioError::CollectionNotFound("projects".to_string())),
        }
    }

    async fn submit_message(&self, msg: NewMessage) -> PortfolioResult<SubmitAck> {
        tokio::time::sleep(SUBMIT_DELAY).await;
        match &self.messages {
            Some(messages) => {
                messages.lock().push(MessageRecord::new(msg));
                Ok(SubmitAck {
                    success: true,
                    id: Utc::now().timestamp_millis(),
                })
            }
            None => Err(PortfolioError::CollectionNotFound("messages".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_returns_seed_projects_in_id_order() {
        let store = MockStore::new();
        let projects = store.fetch_projects().await.unwrap();

        assert_eq!(projects.len(), 3);
        let ids: Vec<u64> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["E-commerce Website", "Weather App", "Task Manager"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_preserves_tag_order() {
        let store = MockStore::new();
        let projects = store.fetch_projects().await.unwrap();
        assert_eq!(projects[0].tags, vec!["HTML", "CSS", "JavaScript", "Node.js"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_empty_collection_resolves_empty() {
        let store = MockStore::with_projects(Vec::new());
        let projects = store.fetch_projects().await.unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_broken_store_fails_with_collection_not_found() {
        let store = MockStore::broken();

        let fetch_err = store.fetch_projects().await.unwrap_err();
        assert!(matches!(
            fetch_err,
            PortfolioError::CollectionNotFound(ref c) if c == "projects"
        ));

        let submit_err = store
            .submit_message(NewMessage {
                name: "A".to_string(),
                email: "a@example.com".to_string(),
                message: "hi".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            submit_err,
            PortfolioError::CollectionNotFound(ref c) if c == "messages"
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_appends_and_acknowledges() {
        let store = MockStore::new();
        let ack = store
            .submit_message(NewMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "hello".to_string(),
            })
            .await
            .unwrap();

        assert!(ack.success);
        let messages = store.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "Ada");
        assert_eq!(messages[0].message, "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submissions_accumulate() {
        let store = MockStore::new();
        for i in 0..3 {
            store
                .submit_message(NewMessage {
                    name: format!("user-{i}"),
                    email: format!("user-{i}@example.com"),
                    message: "hi".to_string(),
                })
                .await
                .unwrap();
        }
        assert_eq!(store.messages().len(), 3);
    }
}
