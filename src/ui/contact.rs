use super::notice::Notice;
use crate::errors::ApiError;
use crate::models::NewContactMessage;
use crate::services::ContactService;

pub const SENT: &str = "Message sent! We'll get back to you soon.";
pub const SEND_FAILED: &str = "Failed to send message. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Name, email and message are required.")]
    MissingFields,

    #[error("Your message is already being sent.")]
    InProgress,

    #[error("{}", .0.detail().unwrap_or(SEND_FAILED))]
    Rejected(#[source] ApiError),
}

/// Contact section form. Keeps the entered values until a send succeeds.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
    notice: Option<Notice>,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            ..Self::default()
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting
            && [&self.name, &self.email, &self.message]
                .iter()
                .all(|field| !field.trim().is_empty())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn submit(&mut self, contact: &dyn ContactService) -> Result<(), FormError> {
        if self.submitting {
            return Err(FormError::InProgress);
        }
        if !self.can_submit() {
            self.notice = Some(Notice::error(FormError::MissingFields.to_string()));
            return Err(FormError::MissingFields);
        }

        let body = NewContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        self.submitting = true;
        let result = contact.create(&body).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                tracing::info!("contact message sent");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.notice = Some(Notice::success(SENT));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact message rejected");
                let err = FormError::Rejected(e);
                self.notice = Some(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::services::fake::FakeBackend;

    #[tokio::test]
    async fn test_requires_all_fields() {
        let backend = FakeBackend::default();
        let mut form = ContactForm::new("Ana", "ana@example.com", "  ");
        assert!(!form.can_submit());
        assert!(matches!(
            form.submit(&backend).await,
            Err(FormError::MissingFields)
        ));
        assert!(backend.calls().is_empty());
        assert_eq!(form.name, "Ana");
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let backend = FakeBackend::default();
        let mut form = ContactForm::new("Ana", "ana@example.com", "Do you travel?");
        form.submit(&backend).await.unwrap();

        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert_eq!(form.notice(), Some(&Notice::success(SENT)));
        let sent = backend.created_messages.lock().unwrap();
        assert_eq!(sent[0].message, "Do you travel?");
    }

    #[tokio::test]
    async fn test_failure_shows_server_detail() {
        let backend = FakeBackend::default();
        backend.fail_writes.store(true, Ordering::SeqCst);
        *backend.reject_detail.lock().unwrap() = Some("value is not a valid email address".into());

        let mut form = ContactForm::new("Ana", "not-an-email", "Hi");
        assert!(form.submit(&backend).await.is_err());
        assert_eq!(
            form.notice(),
            Some(&Notice::error("value is not a valid email address"))
        );
        assert_eq!(form.email, "not-an-email");
    }

    #[tokio::test]
    async fn test_failure_without_detail_is_generic() {
        let backend = FakeBackend::default();
        backend.fail_writes.store(true, Ordering::SeqCst);

        let mut form = ContactForm::new("Ana", "ana@example.com", "Hi");
        assert!(form.submit(&backend).await.is_err());
        assert_eq!(form.notice(), Some(&Notice::error(SEND_FAILED)));
    }
}
