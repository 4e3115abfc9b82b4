// Dense vectorization through the external sentence encoder.
//
// Encoder calls are independent per document, so they fan out with bounded
// concurrency and join before anything downstream runs — the same batch
// barrier the sparse path has, relaxed only in how the per-document work
// parallelizes. Any single failure aborts the batch: a report built from an
// inconsistent vector space would be meaningless.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tracing::debug;

use super::encoder::SentenceEncoder;
use super::traits::Vectorizer;
use super::{DocVector, VectorizeError};

pub struct EmbeddingVectorizer {
    encoder: Arc<dyn SentenceEncoder>,
    concurrency: usize,
}

impl EmbeddingVectorizer {
    pub fn new(encoder: Arc<dyn SentenceEncoder>, concurrency: usize) -> Self {
        Self {
            encoder,
            concurrency: concurrency.max(1),
        }
    }
}

#[async_trait]
impl Vectorizer for EmbeddingVectorizer {
    async fn vectorize_batch(&self, contents: &[String]) -> Result<Vec<DocVector>, VectorizeError> {
        if contents.is_empty() {
            return Err(VectorizeError::EmptyBatch);
        }

        // Fan out, preserving document order on the way back in. Each future
        // owns its text; borrowing it through the closure trips rustc's
        // higher-ranked lifetime limitation for async blocks.
        let results: Vec<Result<Vec<f64>, VectorizeError>> =
            stream::iter(contents.iter().cloned().map(|text| {
                let encoder = Arc::clone(&self.encoder);
                async move { encoder.embed(&text).await }
            }))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut vectors = Vec::with_capacity(results.len());
        let mut expected_dim: Option<usize> = None;

        for result in results {
            let embedding = result?;
            match expected_dim {
                None => expected_dim = Some(embedding.len()),
                Some(expected) if expected != embedding.len() => {
                    return Err(VectorizeError::DimensionMismatch {
                        expected,
                        actual: embedding.len(),
                    });
                }
                Some(_) => {}
            }
            vectors.push(DocVector::Dense(embedding));
        }

        debug!(
            documents = vectors.len(),
            dim = expected_dim.unwrap_or(0),
            "Embedded batch"
        );

        Ok(vectors)
    }
}
