//! HTTP client for a completions-style generation endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GenerationConfig;
use crate::error::GenerationFailed;
use crate::generator::TextGenerator;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    text: Option<String>,
}

/// Generator backed by a remote completions API
#[derive(Clone)]
pub struct HttpGenerator {
    client: Client,
    config: GenerationConfig,
}

impl HttpGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationFailed> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationFailed::new(format!("client setup: {e}")))?;

        Ok(Self { client, config })
    }

}

#[async_trait]
impl TextGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationFailed> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(GenerationFailed::new("no API credential configured"));
        };

        let request = CompletionRequest {
            model: &self.config.model,
            prompt,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            "Requesting completion"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationFailed::new(format!("network error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(%status, "Completion request rejected");
            return Err(GenerationFailed::new(format!("status {status}: {text}")));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationFailed::new(format!("invalid response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.text)
            .ok_or_else(|| GenerationFailed::new("response contained no text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Accept one connection, answer it, and hand back the raw request
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                concat!(
                    "HTTP/1.1 {}\r\n",
                    "content-type: application/json\r\n",
                    "content-length: {}\r\n",
                    "connection: close\r\n\r\n{}",
                ),
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{addr}/v1/completions"), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&buf).into_owned()
    }

    fn config_for(endpoint: String) -> GenerationConfig {
        GenerationConfig::default()
            .with_endpoint(endpoint)
            .with_api_key("sk-test")
    }

    #[tokio::test]
    async fn test_generate_returns_first_choice() {
        let body = r#"{"choices":[{"text":" Rust is fast."},{"text":"ignored"}]}"#;
        let (endpoint, server) = serve_once("200 OK", body).await;
        let generator = HttpGenerator::new(config_for(endpoint)).unwrap();

        let text = generator.generate("Rust").await.unwrap();
        assert_eq!(text, " Rust is fast.");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1/completions"));
        assert!(request.to_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains(r#""prompt":"Rust""#));
        assert!(request.contains(r#""max_tokens":100"#));
    }

    #[tokio::test]
    async fn test_non_success_status_fails() {
        let (endpoint, _server) = serve_once("401 Unauthorized", r#"{"error":"bad key"}"#).await;
        let generator = HttpGenerator::new(config_for(endpoint)).unwrap();

        let err = generator.generate("topic").await.unwrap_err();
        assert!(err.reason.contains("401"));
    }

    #[tokio::test]
    async fn test_empty_choices_fail() {
        let (endpoint, _server) = serve_once("200 OK", r#"{"choices":[]}"#).await;
        let generator = HttpGenerator::new(config_for(endpoint)).unwrap();

        let err = generator.generate("topic").await.unwrap_err();
        assert_eq!(err, GenerationFailed::new("response contained no text"));
    }

    #[tokio::test]
    async fn test_connection_refused_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let generator = HttpGenerator::new(config_for(format!("http://{addr}/"))).unwrap();
        let err = generator.generate("topic").await.unwrap_err();

        assert!(err.reason.starts_with("network error"));
    }

    #[tokio::test]
    async fn test_missing_credential_fails_without_request() {
        let config = GenerationConfig::default().with_endpoint("http://127.0.0.1:9/");
        let generator = HttpGenerator::new(config).unwrap();

        let err = generator.generate("topic").await.unwrap_err();
        assert_eq!(err.reason, "no API credential configured");
    }
}
