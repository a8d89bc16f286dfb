// SNS notifications forwarded to a Slack incoming webhook

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod message;
pub mod webhook;

#[cfg(test)]
mod test_support;
