use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable has not been set")]
    MissingWebhookUrl(String),
    // The URL carries the hook's credentials, so only the parse failure is kept.
    #[error("webhook URL is not a valid absolute URL: {0}")]
    InvalidWebhookUrl(String),
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("request to hook returned http status {0}")]
    HttpStatus(u16),
    #[error("request to hook failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("http client has been shut down")]
    ClientClosed,
}

impl SendError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        SendError::Transport(err.without_url())
    }
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to build http client")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Debug)]
pub struct RecordFailure {
    pub index: usize,
    pub error: SendError,
}

// At least one record of the invocation was not delivered
#[derive(Debug)]
pub struct DispatchError {
    attempted: usize,
    failures: Vec<RecordFailure>,
}

impl DispatchError {
    // None when every record was delivered
    pub fn from_failures(attempted: usize, failures: Vec<RecordFailure>) -> Option<Self> {
        if failures.is_empty() {
            return None;
        }
        Some(Self { attempted, failures })
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn failures(&self) -> &[RecordFailure] {
        &self.failures
    }

    pub fn first(&self) -> &RecordFailure {
        &self.failures[0]
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.first();
        write!(
            f,
            "{} of {} deliveries failed, first at record {}: {}",
            self.failures.len(),
            self.attempted,
            first.index,
            first.error
        )
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.first().error)
    }
}
