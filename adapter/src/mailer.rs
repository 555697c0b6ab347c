use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use derive_new::new;
use kernel::mailer::{Email, Mailer};
use reqwest::Client;
use shared::config::MailerConfig;
use shared::error::{AppError, AppResult};

const GMAIL_SEND_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages/send";

#[derive(new)]
pub struct GmailMailerImpl {
    client: Client,
    config: MailerConfig,
}

#[async_trait]
impl Mailer for GmailMailerImpl {
    async fn send(&self, email: Email) -> AppResult<()> {
        let message_str = format!(
            "To: {}\r\nSubject: {}\r\nContent-Type: text/plain; charset=UTF-8\r\n\r\n{}",
            email.to, email.subject, email.body
        );

        let encoded_message = general_purpose::URL_SAFE_NO_PAD.encode(message_str.as_bytes());

        let res = self
            .client
            .post(GMAIL_SEND_URL)
            .bearer_auth(&self.config.access_token)
            .json(&serde_json::json!({ "raw": encoded_message }))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Gmail error: {e}")))?;

        if !res.status().is_success() {
            let detail = res.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Gmail send failed: {detail}"
            )));
        }

        Ok(())
    }
}
