use crate::{Result, config::ApiConfig};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Seam between the dispatch loop and the remote OCR service.
#[async_trait]
pub trait OcrApi: Send + Sync {
    /// Submits one record and returns the parsed JSON response body.
    async fn submit(&self, record: &Value) -> Result<Value>;
}

pub struct HttpOcrApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOcrApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OcrApi for HttpOcrApi {
    async fn submit(&self, record: &Value) -> Result<Value> {
        debug!("Submitting record to {}", self.endpoint);

        // The response is trusted verbatim: no status check, no shape
        // validation. A non-2xx body still passes through as the result.
        let response = self.client.post(&self.endpoint).json(record).send().await?;
        let body: Value = response.json().await?;

        Ok(body)
    }
}
