use async_trait::async_trait;
use ocr_batch::{Error, Result, api::OcrApi};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock OCR API for testing: records every submitted record and replays
/// scripted responses in order.
#[derive(Debug)]
pub struct MockOcrApi {
    pub responses: Arc<Mutex<Vec<Value>>>,
    pub requests: Arc<Mutex<Vec<Value>>>,
    pub error: Option<String>,
}

impl MockOcrApi {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<Value>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OcrApi for MockOcrApi {
    async fn submit(&self, record: &Value) -> Result<Value> {
        self.requests.lock().unwrap().push(record.clone());

        if let Some(ref error) = self.error {
            return Err(Error::api(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::api("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockOcrApi {
    fn default() -> Self {
        Self::new()
    }
}
