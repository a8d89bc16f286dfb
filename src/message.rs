use aws_lambda_events::event::sns::SnsRecord;
use serde::Serialize;

// SNS notification reduced to the fields the hook message uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub topic_arn: String,
    pub subject: Option<String>,
    pub message: String,
}

impl From<SnsRecord> for NotificationRecord {
    fn from(record: SnsRecord) -> Self {
        let sns = record.sns;
        Self {
            topic_arn: sns.topic_arn,
            subject: sns.subject,
            message: sns.message,
        }
    }
}

// Slack hook expects json in the format {"text": "your-message"}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPayload {
    pub text: String,
}

pub fn format(record: &NotificationRecord) -> ChatPayload {
    let mut text = format!("*From:* {}\n", record.topic_arn);
    if let Some(subject) = &record.subject {
        text.push_str(&format!("*Subject:* {subject}\n"));
    }
    text.push_str(&format!("*Message:* {}\n", record.message));
    ChatPayload { text }
}
