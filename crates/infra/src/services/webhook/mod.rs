use crate::Config;
use remindr_domain::{Reminder, TIME_FORMAT};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

const WEBHOOK_KEY_HEADER: &str = "remindr-webhook-key";

/// Delivery of a due reminder to the outside world. Delivery is best-effort
/// and fire-and-forget: the scheduler logs the outcome but marks the
/// reminder sent either way.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn notify(&self, reminder: &Reminder) -> anyhow::Result<()>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReminderWebhookBody {
    id: i64,
    task: String,
    target_time: String,
    recipient: String,
}

impl ReminderWebhookBody {
    fn new(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id,
            task: reminder.task.clone(),
            target_time: reminder.target_time.format(TIME_FORMAT).to_string(),
            recipient: reminder.recipient.clone(),
        }
    }
}

/// Posts due reminders as JSON to the configured webhook. The client
/// timeout bounds a slow receiver so that one delivery cannot delay the
/// rest of the scheduler cycle.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: Option<String>,
    key: Option<String>,
}

impl WebhookNotifier {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("To build the webhook HTTP client");
        Self {
            client,
            url: config.webhook_url.clone(),
            key: config.webhook_key.clone(),
        }
    }
}

#[async_trait::async_trait]
impl INotifier for WebhookNotifier {
    async fn notify(&self, reminder: &Reminder) -> anyhow::Result<()> {
        let url = match &self.url {
            Some(url) => url,
            None => {
                info!(
                    "No webhook configured. Reminder {} for {} is due: {}",
                    reminder.id, reminder.recipient, reminder.task
                );
                return Ok(());
            }
        };

        let mut request = self
            .client
            .post(url)
            .json(&ReminderWebhookBody::new(reminder));
        if let Some(key) = &self.key {
            request = request.header(WEBHOOK_KEY_HEADER, key);
        }
        request.send().await?.error_for_status()?;
        Ok(())
    }
}
