//! Contact form validation.
//!
//! Validation happens here, before any data source is involved; a
//! draft with a blank or whitespace-only field never produces a
//! submission payload.

use crate::error::{PortfolioError, PortfolioResult};
use crate::source::DataSource;
use crate::types::{NewMessage, SubmitAck};

/// User-facing message for a failed validation
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";

/// Raw contact form contents, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Validate the draft into a submission payload.
    ///
    /// All three fields must contain at least one non-whitespace
    /// character. Field values are passed through unmodified.
    pub fn validate(&self) -> PortfolioResult<NewMessage> {
        let blank = |s: &str| s.trim().is_empty();
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(PortfolioError::Validation(VALIDATION_MESSAGE.to_string()));
        }
        Ok(NewMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }
}

/// Validate a draft and, only when it passes, submit it through the
/// given data source. A draft with a blank field fails with
/// `Validation` and the source is never called.
pub async fn submit_contact(
    source: &dyn DataSource,
    draft: ContactDraft,
) -> PortfolioResult<SubmitAck> {
    let payload = draft.validate()?;
    source.submit_message(payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockStore;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes_through() {
        let msg = draft("Ada", "ada@example.com", "hello").validate().unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "hello");
    }

    #[test]
    fn test_blank_email_rejected() {
        let err = draft("A", "", "hi").validate().unwrap_err();
        assert!(matches!(err, PortfolioError::Validation(ref m) if m == VALIDATION_MESSAGE));
    }

    #[test]
    fn test_each_field_required() {
        assert!(draft("", "a@example.com", "hi").validate().is_err());
        assert!(draft("A", "", "hi").validate().is_err());
        assert!(draft("A", "a@example.com", "").validate().is_err());
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert!(draft("   ", "a@example.com", "hi").validate().is_err());
        assert!(draft("A", "a@example.com", " \t\n").validate().is_err());
    }

    #[test]
    fn test_values_not_trimmed() {
        let msg = draft(" Ada ", "ada@example.com", "hi").validate().unwrap();
        assert_eq!(msg.name, " Ada ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_draft_never_reaches_source() {
        let store = MockStore::new();
        let err = submit_contact(&store, draft("A", "", "hi")).await.unwrap_err();
        assert!(matches!(err, PortfolioError::Validation(ref m) if m == VALIDATION_MESSAGE));
        assert!(store.messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_draft_is_submitted() {
        let store = MockStore::new();
        let ack = submit_contact(&store, draft("Ada", "ada@example.com", "hello"))
            .await
            .unwrap();
        assert!(ack.success);

        let messages = store.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "Ada");
    }
}
