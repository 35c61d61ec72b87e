//! HTTP client for a locally hosted Ollama generation endpoint

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Ollama /api/generate request format
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Subset of the /api/generate reply this tool consumes
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// Client for one Ollama host, reused across the whole batch
pub struct OllamaClient {
    host: String,
    http: reqwest::Client,
}

impl OllamaClient {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Submit one prompt and return the completion text.
    ///
    /// Blocks (awaits) until the full completion is available; streaming is
    /// disabled on the wire. A whitespace-only completion is mapped to a
    /// `[No response generated]` placeholder.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let payload = GenerateRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let reply: GenerateResponse = self
            .http
            .post(generate_url(&self.host))
            .json(&payload)
            .send()
            .await
            .context("Ollama request failed")?
            .error_for_status()
            .context("Ollama returned non-success status")?
            .json()
            .await
            .context("Failed to decode Ollama response JSON")?;

        let text = reply.response.trim();
        if text.is_empty() {
            Ok("[No response generated]".to_string())
        } else {
            Ok(text.to_string())
        }
    }
}

fn generate_url(host: &str) -> String {
    format!("{}/api/generate", host.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_stream_disabled() {
        let request = GenerateRequest {
            model: "llama2".to_string(),
            prompt: "What is the hypernym of crimson?".to_string(),
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama2");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn response_decoding_takes_the_response_field() {
        let body = r#"{"model":"llama2","created_at":"2025-01-01T00:00:00Z","response":"red","done":true}"#;
        let reply: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(reply.response, "red");
    }

    #[test]
    fn generate_url_tolerates_trailing_slash() {
        assert_eq!(
            generate_url("http://localhost:11434/"),
            "http://localhost:11434/api/generate"
        );
        assert_eq!(
            generate_url("http://localhost:11434"),
            "http://localhost:11434/api/generate"
        );
    }
}
