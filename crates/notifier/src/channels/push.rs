//! Push gateway channel (FCM legacy HTTP API shape).

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use tracing::{debug, info, warn};

use vocab_common::config::AppConfig;
use vocab_common::types::Reminder;

use crate::channels::NotifyChannel;
use crate::error::ChannelError;

/// Delivers reminders as a topic notification through an HTTP push gateway.
pub struct PushChannel {
    url: String,
    topic: String,
    token: String,
    client: reqwest::Client,
}

impl PushChannel {
    pub fn new(url: String, topic: String, token: String) -> Self {
        Self {
            url,
            topic,
            token,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ChannelError> {
        let token = config
            .push_token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ChannelError::NotConfigured("TOKEN".to_string()))?;

        Ok(Self::new(
            config.push_url.clone(),
            config.push_topic.clone(),
            token,
        ))
    }

    fn format_payload<'a>(&'a self, reminder: &'a Reminder) -> PushPayload<'a> {
        PushPayload {
            to: &self.topic,
            notification: PushNotification {
                title: &reminder.title,
                body: &reminder.body,
            },
        }
    }
}

#[async_trait]
impl NotifyChannel for PushChannel {
    fn name(&self) -> &'static str {
        "push"
    }

    async fn send(&self, reminder: &Reminder) -> Result<(), ChannelError> {
        let payload = self.format_payload(reminder);

        debug!(channel = "push", reminder_id = %reminder.id, "Sending notification");

        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, &self.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(channel = "push", status = %status, topic = %self.topic, "Notification sent");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();

            warn!(
                channel = "push",
                status = %status,
                body = %body,
                "Push gateway request failed"
            );

            Err(ChannelError::Other(format!(
                "Push gateway returned {status}: {body}"
            )))
        }
    }
}

// =============================================================================
// Gateway API types
// =============================================================================

#[derive(Debug, Serialize)]
struct PushPayload<'a> {
    to: &'a str,
    notification: PushNotification<'a>,
}

#[derive(Debug, Serialize)]
struct PushNotification<'a> {
    title: &'a str,
    body: &'a str,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn reminder() -> Reminder {
        Reminder {
            id: Uuid::new_v4(),
            title: "APPLE - BANANA".to_string(),
            body: "- apple | elma | fruit\n- banana | muz | yellow\n".to_string(),
            words: vec!["apple".to_string(), "banana".to_string()],
            created_at: Utc::now(),
        }
    }

    fn channel(server: &MockServer) -> PushChannel {
        PushChannel::new(
            format!("{}/fcm/send", server.uri()),
            "/topics/vocabulary".to_string(),
            "key=test-token".to_string(),
        )
    }

    #[tokio::test]
    async fn test_posts_topic_notification() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/fcm/send"))
            .and(header("authorization", "key=test-token"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "to": "/topics/vocabulary",
                "notification": {
                    "title": "APPLE - BANANA",
                    "body": "- apple | elma | fruit\n- banana | muz | yellow\n"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message_id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        channel(&server).send(&reminder()).await.unwrap();
    }

    #[tokio::test]
    async fn test_gateway_rejection_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("InvalidKey"))
            .mount(&server)
            .await;

        let err = channel(&server).send(&reminder()).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("401"), "{}", message);
        assert!(message.contains("InvalidKey"), "{}", message);
    }

    #[test]
    fn test_from_config_requires_token() {
        let config = AppConfig::from_lookup(|key| {
            (key == "DB_URI").then(|| "mongodb://localhost".to_string())
        })
        .unwrap();

        assert!(matches!(
            PushChannel::from_config(&config),
            Err(ChannelError::NotConfigured(_))
        ));
    }
}
