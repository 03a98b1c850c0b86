//! Outcome notification over a Discord-compatible webhook.
//!
//! Posts `{"content": "<summary>"}` once the sequence has finished. A failed
//! notification is logged and never changes the run's exit code.

use crate::error::NotifyError;
use mend_core::{BestEffort, RepairReport};
use std::time::Duration;

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts the final outcome of a repair run to a webhook
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    /// Create a notifier for `url`
    pub fn new(url: impl Into<String>) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(NOTIFY_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Message text for a finished run against `target`
    pub fn message(report: &RepairReport, target: &str) -> String {
        let icon = if report.succeeded() { "✅" } else { "❌" };
        let mut message = format!("{icon} [mend] {target}: {}", report.summary());
        if let Some(correction) = &report.correction {
            if !correction.fully_applied() {
                message.push_str(" (correction partially failed)");
            }
        }
        if let Some(readiness) = report.readiness {
            if !readiness.ready {
                message.push_str(&format!(
                    " (store not ready after {} attempts)",
                    readiness.attempts
                ));
            }
        }
        message
    }

    async fn post(&self, content: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// Post the outcome; failures are logged and returned as data
    pub async fn notify(&self, report: &RepairReport, target: &str) -> BestEffort<()> {
        let content = Self::message(report, target);
        BestEffort::capture("notify", self.post(&content).await)
    }
}
