use crate::core::crypto::PayloadCipher;
use crate::domain::model::Code;
use crate::domain::ports::{ConfigProvider, StatusClient};
use crate::utils::error::{PnrError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

/// Posts `{"pnrNumber": <payload>}` to the status endpoint. Server
/// certificates are always verified.
pub struct HttpStatusClient {
    client: Client,
    endpoint: String,
    cipher: PayloadCipher,
}

impl HttpStatusClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            cipher: PayloadCipher::default(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_endpoint(), config.request_timeout())
    }
}

#[async_trait]
impl StatusClient for HttpStatusClient {
    async fn fetch_status(&self, code: &Code) -> Result<serde_json::Value> {
        let payload = self.cipher.encrypt_code(code);
        let body = json!({ "pnrNumber": payload });

        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(PnrError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| PnrError::InvalidResponseFormat {
            reason: e.to_string(),
        })
    }
}
