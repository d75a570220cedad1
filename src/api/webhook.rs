use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

#[cfg(test)]
use mockall::automock;

use crate::error::SubmissionError;
use crate::models::submission_models::WebhookPayload;

/// Receiver of finished submissions. Any status is returned as-is, the caller decides what counts as success.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WebhookClient: Send + Sync {
    async fn post_submission(&self, payload: &WebhookPayload) -> Result<StatusCode, SubmissionError>;
}

pub struct HttpWebhookClient {
    client: Client,
    url: Url,
}

impl HttpWebhookClient {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl WebhookClient for HttpWebhookClient {
    async fn post_submission(&self, payload: &WebhookPayload) -> Result<StatusCode, SubmissionError> {
        tracing::debug!("Posting submission to webhook {}", self.url);
        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach webhook: {}", e);
                SubmissionError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Webhook answered {}: {}", status, body);
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission_models::Scenario;
    use axum::{
        extract::State,
        http::{HeaderMap, header},
        routing::post,
        Json, Router,
    };
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>;

    async fn spawn_receiver(reply: StatusCode) -> (Url, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route(
                "/webhook/test",
                post(
                    move |State(captured): State<Captured>, headers: HeaderMap, Json(body): Json<serde_json::Value>| async move {
                        let content_type = headers
                            .get(header::CONTENT_TYPE)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        captured.lock().unwrap().push((content_type, body));
                        reply
                    },
                ),
            )
            .with_state(captured.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        let url = Url::parse(&format!("http://{}/webhook/test", addr)).unwrap();
        (url, captured)
    }

    fn payload() -> WebhookPayload {
        WebhookPayload {
            name: String::new(),
            email: "a@b.com".to_string(),
            height: "180".to_string(),
            scenario: Scenario::Official,
            image: "aGVsbG8=".to_string(),
            file_name: "me.png".to_string(),
            mime_type: "image/png".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_json_body_once() {
        let (url, captured) = spawn_receiver(StatusCode::OK).await;
        let client = HttpWebhookClient::new(url);

        let status = client.post_submission(&payload()).await.unwrap();

        assert_eq!(status, StatusCode::OK);
        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let (content_type, body) = &captured[0];
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body["scenario"], "official");
        assert_eq!(body["fileName"], "me.png");
        assert_eq!(body["name"], "");
    }

    #[tokio::test]
    async fn returns_non_success_status_without_error() {
        let (url, _captured) = spawn_receiver(StatusCode::INTERNAL_SERVER_ERROR).await;
        let client = HttpWebhookClient::new(url);

        let status = client.post_submission(&payload()).await.unwrap();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unreachable_webhook_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = HttpWebhookClient::new(Url::parse(&format!("http://{}/webhook", addr)).unwrap());

        let err = client.post_submission(&payload()).await.unwrap_err();

        assert!(matches!(err, SubmissionError::Transport(_)));
    }
}
