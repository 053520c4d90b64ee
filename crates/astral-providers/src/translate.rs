//! LibreTranslate-compatible translation client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use astral_core::capability::{TranslateError, Translator};

/// Translation client configuration.
#[derive(Debug, Clone)]
pub struct LibreTranslateConfig {
    /// Server base URL.
    pub endpoint: String,
    /// Optional API key for hosted instances.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LibreTranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            api_key: None,
            timeout_secs: 15,
        }
    }
}

/// Translation client speaking the LibreTranslate API.
pub struct LibreTranslateClient {
    client: reqwest::Client,
    config: LibreTranslateConfig,
}

impl LibreTranslateClient {
    pub fn new(config: LibreTranslateConfig) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslateError::Http(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn translate_url(&self) -> String {
        format!("{}/translate", self.config.endpoint.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[async_trait]
impl Translator for LibreTranslateClient {
    async fn translate(&self, text: &str, target_code: &str) -> Result<String, TranslateError> {
        let body = TranslateRequest {
            q: text,
            source: "auto",
            target: target_code,
            api_key: self.config.api_key.as_deref(),
        };
        let response = self
            .client
            .post(self.translate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslateError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(TranslateError::Response(format!("HTTP {}: {}", status, text)));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::Response(e.to_string()))?;
        Ok(parsed.translated_text)
    }
}
