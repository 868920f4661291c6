use reqwest::Client;
use seaboo_domain::AccountWebhookSettings;
use std::{sync::Mutex, time::Duration};

/// Header carrying the webhook key so receivers can check that the
/// notification came from this server
pub const WEBHOOK_KEY_HEADER: &str = "seaboo-webhook-key";

/// Delivers JSON notifications to the webhook an `Account` has configured
#[async_trait::async_trait]
pub trait IWebhookSender: Send + Sync {
    async fn send(
        &self,
        webhook: &AccountWebhookSettings,
        payload: serde_json::Value,
    ) -> anyhow::Result<()>;
}

pub struct HttpWebhookSender {
    client: Client,
}

impl HttpWebhookSender {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for HttpWebhookSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IWebhookSender for HttpWebhookSender {
    async fn send(
        &self,
        webhook: &AccountWebhookSettings,
        payload: serde_json::Value,
    ) -> anyhow::Result<()> {
        self.client
            .post(&webhook.url)
            .header(WEBHOOK_KEY_HEADER, &webhook.key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentWebhook {
    pub url: String,
    pub key: String,
    pub payload: serde_json::Value,
}

/// Keeps the notifications in memory instead of sending them.
/// Used together with the inmemory repositories.
pub struct RecordingWebhookSender {
    sent: Mutex<Vec<SentWebhook>>,
}

impl RecordingWebhookSender {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentWebhook> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for RecordingWebhookSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IWebhookSender for RecordingWebhookSender {
    async fn send(
        &self,
        webhook: &AccountWebhookSettings,
        payload: serde_json::Value,
    ) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(SentWebhook {
            url: webhook.url.clone(),
            key: webhook.key.clone(),
            payload,
        });
        Ok(())
    }
}
