use std::env;

use anyhow::Result;

use crate::normalize::Language;

/// Default similarity threshold. Calibrated against the sparse TF-IDF score
/// distribution; dense embedding scores cluster differently, so tune the
/// threshold per backend rather than assuming one value fits both.
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Which vectorization strategy to run the batch through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorizerBackend {
    /// Corpus-relative TF-IDF (default) — local, deterministic, no API calls
    TfIdf,
    /// External sentence-encoder embeddings — requires ENCODER_API_URL
    Embedding,
}

/// Central configuration loaded from environment variables.
///
/// Secrets come from env vars (never hardcoded). The .env file is loaded
/// automatically at startup via dotenvy; CLI flags override the env values.
pub struct Config {
    /// Inclusive similarity threshold for reporting a pair as duplicates
    pub threshold: f64,
    pub vectorizer_backend: VectorizerBackend,
    /// Stopword language used by the normalizer
    pub language: Language,
    /// Sentence-encoder endpoint (embedding backend only)
    pub encoder_url: String,
    pub encoder_api_key: String,
    /// Per-call timeout for the encoder, in seconds
    pub encoder_timeout_secs: u64,
    /// How many encoder calls to keep in flight at once
    pub encoder_concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables. Everything has a
    /// default except the encoder endpoint, which is only required when the
    /// embedding backend is selected.
    pub fn load() -> Result<Self> {
        let threshold = match env::var("GAZETTE_THRESHOLD") {
            Ok(raw) => raw
                .parse::<f64>()
                .map_err(|_| anyhow::anyhow!("GAZETTE_THRESHOLD is not a number: {raw}"))?,
            Err(_) => DEFAULT_THRESHOLD,
        };

        let vectorizer_backend = match env::var("GAZETTE_VECTORIZER").as_deref() {
            Ok("embedding") => VectorizerBackend::Embedding,
            // "tfidf" or unset both default to TF-IDF
            _ => VectorizerBackend::TfIdf,
        };

        let language = match env::var("GAZETTE_LANGUAGE").as_deref() {
            Ok("en") | Ok("english") => Language::English,
            _ => Language::French,
        };

        let encoder_timeout_secs = env::var("ENCODER_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(30);

        let encoder_concurrency = env::var("ENCODER_CONCURRENCY")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8);

        Ok(Self {
            threshold,
            vectorizer_backend,
            language,
            encoder_url: env::var("ENCODER_API_URL").unwrap_or_default(),
            encoder_api_key: env::var("ENCODER_API_KEY").unwrap_or_default(),
            encoder_timeout_secs,
            encoder_concurrency,
        })
    }

    /// Check that the sentence-encoder endpoint is configured.
    /// Call this before running the embedding backend.
    pub fn require_encoder(&self) -> Result<()> {
        if self.encoder_url.is_empty() {
            anyhow::bail!(
                "ENCODER_API_URL not set. The embedding backend needs a sentence-encoder\n\
                 endpoint. Add it to your .env file, or use the tfidf backend instead."
            );
        }
        Ok(())
    }
}
