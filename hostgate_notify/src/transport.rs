use async_trait::async_trait;
use thiserror::Error;

/// An error delivering a webhook request
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Webhook endpoint returned status {0}")]
    Status(u16),
    #[error("Couldn't serialise payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Something that can deliver a JSON document to a webhook URL
#[async_trait]
pub trait WebhookTransport: Send + Sync + 'static {
    /// Make a single attempt to POST `body` to `url`
    async fn post_json(&self, url: &str, body: String) -> Result<(), WebhookError>;
}

/// [`WebhookTransport`] over HTTP(S), using the HTTP client's default timeouts
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WebhookTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<(), WebhookError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        // The response body isn't needed; dropping the response releases the connection
        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status.as_u16()));
        }
        Ok(())
    }
}
