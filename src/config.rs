use std::env;

use reqwest::Url;

use crate::error::ConfigError;

pub const HOOK_URL_VAR: &str = "SLACK_HOOK_URL";

// Resolved on every send, never cached
#[derive(Debug, Clone)]
pub enum HookUrl {
    Env(String),
    Fixed(Option<String>),
}

impl HookUrl {
    pub fn from_env() -> Self {
        HookUrl::Env(HOOK_URL_VAR.to_string())
    }

    pub fn fixed(url: impl Into<String>) -> Self {
        HookUrl::Fixed(Some(url.into()))
    }

    fn name(&self) -> &str {
        match self {
            HookUrl::Env(var) => var,
            HookUrl::Fixed(_) => HOOK_URL_VAR,
        }
    }

    pub fn resolve(&self) -> Result<Url, ConfigError> {
        let raw = match self {
            HookUrl::Env(var) => env::var(var).ok(),
            HookUrl::Fixed(url) => url.clone(),
        };
        let raw = raw
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingWebhookUrl(self.name().to_string()))?;
        Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidWebhookUrl(e.to_string()))
    }
}
