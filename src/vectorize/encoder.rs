// External sentence-encoder capability.
//
// The dense path depends on a third-party embedding service. That dependency
// is kept behind a narrow trait (`embed one text → fixed-length vector`) so
// the pipeline can run against a deterministic stub in tests and the HTTP
// provider can be swapped without touching vectorization code.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::VectorizeError;

/// Semantic text encoder producing one fixed-length vector per text.
#[async_trait]
pub trait SentenceEncoder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f64>, VectorizeError>;
}

/// HTTP-backed sentence encoder. Speaks a minimal JSON protocol:
/// POST `{ "input": "<text>" }` → `{ "embedding": [f64, ...] }`.
///
/// Every call is wrapped in a timeout; the service not answering in time is
/// a vectorization failure for the whole batch, not a silent skip.
pub struct HttpSentenceEncoder {
    client: Client,
    endpoint: String,
    api_key: String,
    timeout_secs: u64,
}

impl HttpSentenceEncoder {
    pub fn new(endpoint: String, api_key: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            timeout_secs,
        }
    }
}

#[async_trait]
impl SentenceEncoder for HttpSentenceEncoder {
    async fn embed(&self, text: &str) -> Result<Vec<f64>, VectorizeError> {
        let request = EmbedRequest { input: text };

        let mut call = self.client.post(&self.endpoint).json(&request);
        if !self.api_key.is_empty() {
            call = call.bearer_auth(&self.api_key);
        }

        let send = async {
            let response = call.send().await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(VectorizeError::EncoderUnavailable(format!(
                    "{status}: {body}"
                )));
            }

            let parsed: EmbedResponse = response.json().await?;
            Ok(parsed.embedding)
        };

        let embedding = tokio::time::timeout(Duration::from_secs(self.timeout_secs), send)
            .await
            .map_err(|_| VectorizeError::EncoderTimeout(self.timeout_secs))??;

        debug!(
            dim = embedding.len(),
            text_preview = %preview(text),
            "Embedded text"
        );

        Ok(embedding)
    }
}

/// First 50 characters of the text. Walks chars, not bytes — article text is
/// frequently accented and a byte slice could split a multi-byte character.
fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("chat mange souris"), "chat mange souris");
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        // 49 ASCII chars followed by a multi-byte char: byte index 50 falls
        // inside the "é", so a byte slice would panic here.
        let text = format!("{}é la suite de l'article", "a".repeat(49));
        let cut = preview(&text);
        assert_eq!(cut.chars().count(), 50);
        assert!(cut.ends_with('é'));
    }

    #[test]
    fn test_preview_accented_text() {
        let text = "désertification sécheresse ".repeat(4);
        assert_eq!(preview(&text).chars().count(), 50);
    }

    #[tokio::test]
    async fn test_stalled_service_maps_to_encoder_timeout() {
        // A listener that accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let encoder = HttpSentenceEncoder::new(format!("http://{addr}/embed"), String::new(), 1);
        let result = encoder.embed("chat mange souris").await;

        match result {
            Err(VectorizeError::EncoderTimeout(secs)) => assert_eq!(secs, 1),
            other => panic!("expected EncoderTimeout, got {other:?}"),
        }

        drop(listener);
    }
}
