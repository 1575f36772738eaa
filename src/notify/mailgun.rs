use async_trait::async_trait;

use crate::config::MailgunConfig;
use crate::error::NotifyError;
use crate::models::email::{EmailMessage, SendConfirmation};
use crate::notify::Mailer;

/// Mailgun's messages API: form-encoded POST, basic auth as user `api`.
pub struct MailgunMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl MailgunMailer {
    pub fn new(config: &MailgunConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        let endpoint = format!(
            "{}/{}/messages",
            config.api_base.trim_end_matches('/'),
            config.domain
        );

        Ok(MailgunMailer {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Mailer for MailgunMailer {
    async fn send(&self, message: &EmailMessage) -> Result<SendConfirmation, NotifyError> {
        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth("api", Some(&self.api_key))
            .form(message)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
