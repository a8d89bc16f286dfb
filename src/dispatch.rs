use std::time::Duration;

use futures_util::future::join_all;
use tracing::{error, info};

use crate::config::HookUrl;
use crate::error::{DispatchError, RecordFailure, SendError, SetupError};
use crate::message::{self, NotificationRecord};
use crate::webhook::WebhookSender;

#[derive(Debug)]
pub enum DeliveryOutcome {
    Delivered,
    Failed(SendError),
}

// Fans each invocation's records out to the hook; owns the container's shared client
pub struct Dispatcher {
    sender: WebhookSender,
}

impl Dispatcher {
    pub fn init(hook_url: HookUrl) -> Result<Self, SetupError> {
        Ok(Self::new(WebhookSender::new(hook_url)?))
    }

    pub fn with_timeout(hook_url: HookUrl, timeout: Duration) -> Result<Self, SetupError> {
        Ok(Self::new(WebhookSender::with_timeout(hook_url, timeout)?))
    }

    pub fn new(sender: WebhookSender) -> Self {
        Self { sender }
    }

    pub async fn shutdown(&self) {
        if self.sender.close().await {
            info!("http client released");
        }
    }

    // Waits for every send, then fails if any record was not delivered
    pub async fn handle(&self, records: &[NotificationRecord]) -> Result<(), DispatchError> {
        if records.is_empty() {
            info!("no records to deliver");
            return Ok(());
        }

        let outcomes = join_all(
            records
                .iter()
                .enumerate()
                .map(|(index, record)| self.deliver(index, record)),
        )
        .await;

        let failures: Vec<RecordFailure> = outcomes
            .into_iter()
            .enumerate()
            .filter_map(|(index, outcome)| match outcome {
                DeliveryOutcome::Delivered => None,
                DeliveryOutcome::Failed(error) => Some(RecordFailure { index, error }),
            })
            .collect();

        match DispatchError::from_failures(records.len(), failures) {
            Some(err) => Err(err),
            None => {
                info!(delivered = records.len(), "all records delivered");
                Ok(())
            }
        }
    }

    async fn deliver(&self, index: usize, record: &NotificationRecord) -> DeliveryOutcome {
        let payload = message::format(record);
        match self.sender.send(&payload).await {
            Ok(()) => {
                info!(record = index, topic = %record.topic_arn, "delivered");
                DeliveryOutcome::Delivered
            }
            Err(err) => {
                error!(record = index, topic = %record.topic_arn, error = %err, "delivery failed");
                DeliveryOutcome::Failed(err)
            }
        }
    }
}
