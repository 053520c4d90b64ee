//! Ollama generative-text client.

use async_stream::stream;
use async_trait::async_trait;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};

use astral_core::capability::{GenerateError, TextGenerator, TokenStream};

/// Ollama client configuration.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Server base URL.
    pub endpoint: String,
    /// Model name (e.g., "llama3").
    pub model: String,
    /// Request timeout in seconds; bounds the whole streaming session.
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:11434".to_string(),
            model: "llama3".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Generative-text client for an Ollama server.
pub struct OllamaClient {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerateError::Http(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.endpoint.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done: bool,
}

/// Parse one NDJSON line of a streaming response. Blank lines yield `None`.
fn parse_stream_line(line: &str) -> Result<Option<GenerateResponse>, GenerateError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| GenerateError::Serialization(e.to_string()))
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };
        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(GenerateError::Response(format!("HTTP {}: {}", status, text)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| GenerateError::Http(e.to_string()))?;
        let parsed: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| GenerateError::Serialization(e.to_string()))?;
        Ok(parsed.response)
    }

    async fn stream_complete(&self, prompt: &str) -> Result<TokenStream, GenerateError> {
        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: true,
        };
        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(GenerateError::Response(format!("HTTP {}: {}", status, text)));
        }

        let mut bytes = response.bytes_stream();
        Ok(Box::pin(stream! {
            let mut buffer: Vec<u8> = Vec::new();
            'session: while let Some(next) = bytes.next().await {
                let chunk = match next {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        yield Err(GenerateError::Http(e.to_string()));
                        break 'session;
                    }
                };
                buffer.extend_from_slice(&chunk);
                // NDJSON: one JSON object per newline-terminated line.
                while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                    let line: Vec<u8> = buffer.drain(..=pos).collect();
                    match parse_stream_line(&String::from_utf8_lossy(&line)) {
                        Ok(Some(part)) => {
                            if !part.response.is_empty() {
                                yield Ok(part.response);
                            }
                            if part.done {
                                break 'session;
                            }
                        }
                        Ok(None) => {}
                        Err(e) => {
                            yield Err(e);
                            break 'session;
                        }
                    }
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url_normalizes_trailing_slash() {
        let client = OllamaClient::new(OllamaConfig {
            endpoint: "http://localhost:11434/".to_string(),
            ..OllamaConfig::default()
        })
        .unwrap();
        assert_eq!(client.generate_url(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_parse_stream_line_variants() {
        let part = parse_stream_line(r#"{"response":"Hel","done":false}"#)
            .unwrap()
            .unwrap();
        assert_eq!(part.response, "Hel");
        assert!(!part.done);

        let part = parse_stream_line(r#"{"response":"","done":true}"#)
            .unwrap()
            .unwrap();
        assert!(part.done);

        assert!(parse_stream_line("   ").unwrap().is_none());
        assert!(parse_stream_line("not json").is_err());
    }

    #[test]
    fn test_buffered_response_shape() {
        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"model":"llama3","response":"The stars align.","done":true}"#)
                .unwrap();
        assert_eq!(parsed.response, "The stars align.");
    }
}
