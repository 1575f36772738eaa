pub mod mailgun;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

use crate::error::NotifyError;
use crate::models::email::{EmailMessage, SendConfirmation};
use crate::scraping::constants::{RECIPIENT_LOCAL_PART, SENDER_LOCAL_PART, SUBJECT_PREFIX};

pub use mailgun::MailgunMailer;

/// Anything that can deliver an email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<SendConfirmation, NotifyError>;
}

pub struct Notifier<M> {
    mailer: M,
    domain: String,
    send_timeout: Duration,
}

impl<M: Mailer> Notifier<M> {
    pub fn new(mailer: M, domain: impl Into<String>, send_timeout: Duration) -> Self {
        Notifier {
            mailer,
            domain: domain.into(),
            send_timeout,
        }
    }

    pub fn compose(&self, location: &str, url: &str) -> EmailMessage {
        EmailMessage {
            from: format!("{}@{}", SENDER_LOCAL_PART, self.domain),
            to: format!("{}@{}", RECIPIENT_LOCAL_PART, self.domain),
            subject: format!("{} {}", SUBJECT_PREFIX, location),
            text: url.to_string(),
        }
    }

    /// Sends one message for `location`. Failures are logged here and go no
    /// further.
    pub async fn notify(&self, location: &str, url: &str) {
        let message = self.compose(location, url);

        match self.send(&message).await {
            Ok(confirmation) => info!(
                "message sent: ID({}) Resp({})",
                confirmation.id, confirmation.response
            ),
            Err(e) => error!("failed to notify about {}: {}", location, e),
        }
    }

    async fn send(&self, message: &EmailMessage) -> Result<SendConfirmation, NotifyError> {
        tokio::time::timeout(self.send_timeout, self.mailer.send(message))
            .await
            .map_err(|_| NotifyError::Timeout(self.send_timeout))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<EmailMessage>>,
        fail: bool,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, message: &EmailMessage) -> Result<SendConfirmation, NotifyError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.sent.lock().unwrap().push(message.clone());
            if self.fail {
                return Err(NotifyError::Rejected {
                    status: 401,
                    body: "Forbidden".to_string(),
                });
            }
            Ok(SendConfirmation {
                id: "<1@example.com>".to_string(),
                response: "Queued. Thank you.".to_string(),
            })
        }
    }

    #[test]
    fn compose_uses_domain_location_and_url() {
        let notifier = Notifier::new(
            RecordingMailer::default(),
            "example.com",
            Duration::from_secs(10),
        );
        let message = notifier.compose("sundbyberg", "https://booking.test/?enhet=Z209");

        assert_eq!(message.from, "lediga.tider@example.com");
        assert_eq!(message.to, "migrationsverket@example.com");
        assert_eq!(message.subject, "lediga tider för sundbyberg");
        assert_eq!(message.text, "https://booking.test/?enhet=Z209");
    }

    #[tokio::test]
    async fn notify_sends_exactly_one_message() {
        let notifier = Notifier::new(
            RecordingMailer::default(),
            "example.com",
            Duration::from_secs(10),
        );
        notifier.notify("B", "http://b").await;

        let sent = notifier.mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "lediga tider för B");
    }

    #[tokio::test]
    async fn notify_swallows_provider_errors() {
        let mailer = RecordingMailer {
            fail: true,
            ..Default::default()
        };
        let notifier = Notifier::new(mailer, "example.com", Duration::from_secs(10));
        notifier.notify("B", "http://b").await;

        assert_eq!(notifier.mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn slow_mailer_hits_send_timeout() {
        let mailer = RecordingMailer {
            delay: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        let notifier = Notifier::new(mailer, "example.com", Duration::from_millis(20));
        let message = notifier.compose("B", "http://b");

        let result = notifier.send(&message).await;
        assert!(matches!(result, Err(NotifyError::Timeout(_))));
        assert!(notifier.mailer.sent.lock().unwrap().is_empty());
    }
}
