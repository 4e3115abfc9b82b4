// Vectorization — mapping a normalized batch to numeric representations.
//
// Two strategies, chosen once per run: sparse TF-IDF over the batch corpus,
// or dense embeddings from an external sentence encoder. Both run behind the
// Vectorizer trait and produce the whole batch at once — the sparse path
// needs global corpus statistics and the dense path joins its fan-out before
// any pairwise comparison starts.

pub mod embedding;
pub mod encoder;
pub mod tfidf;
pub mod traits;

use std::collections::HashMap;

use thiserror::Error;

/// Why a batch could not be vectorized. Any of these aborts the whole run:
/// a partially vectorized batch has no consistent vector space to compare in.
#[derive(Debug, Error)]
pub enum VectorizeError {
    #[error("cannot vectorize an empty batch")]
    EmptyBatch,

    #[error("sentence encoder unavailable: {0}")]
    EncoderUnavailable(String),

    #[error("sentence encoder timed out after {0}s")]
    EncoderTimeout(u64),

    #[error("encoder returned a {actual}-dimensional vector, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("sentence encoder request failed")]
    Encoder(#[from] reqwest::Error),
}

/// Numeric representation of one document. All documents in a run share one
/// kind, and dense vectors share one length.
#[derive(Debug, Clone, PartialEq)]
pub enum DocVector {
    /// Term → TF-IDF weight, keyed by the batch vocabulary.
    Sparse(HashMap<String, f64>),
    /// Fixed-length embedding from the sentence encoder.
    Dense(Vec<f64>),
}
