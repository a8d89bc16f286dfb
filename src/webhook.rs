use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::HookUrl;
use crate::error::{SendError, SetupError};
use crate::message::ChatPayload;

pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_secs(15);

// One POST per payload, no retry
pub struct WebhookSender {
    hook_url: HookUrl,
    timeout: Duration,
    // Taken out on shutdown; in-flight sends keep their own handle to the pool.
    client: RwLock<Option<reqwest::Client>>,
}

impl WebhookSender {
    pub fn new(hook_url: HookUrl) -> Result<Self, SetupError> {
        Self::with_timeout(hook_url, DEFAULT_DELIVERY_TIMEOUT)
    }

    pub fn with_timeout(hook_url: HookUrl, timeout: Duration) -> Result<Self, SetupError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(SetupError::HttpClient)?;
        Ok(Self {
            hook_url,
            timeout,
            client: RwLock::new(Some(client)),
        })
    }

    pub async fn send(&self, payload: &ChatPayload) -> Result<(), SendError> {
        let url = self.hook_url.resolve()?;
        let client = self
            .client
            .read()
            .await
            .clone()
            .ok_or(SendError::ClientClosed)?;

        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(SendError::transport)?;

        let status = response.status().as_u16();
        debug!(status, "hook responded");
        check_status(status)
    }

    // False if the client was already closed
    pub async fn close(&self) -> bool {
        self.client.write().await.take().is_some()
    }
}

fn check_status(code: u16) -> Result<(), SendError> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(SendError::HttpStatus(code))
    }
}
