// Sparse TF-IDF vectorization over the whole batch.
//
// Two explicit phases: first collect per-term document frequencies across
// every document, then emit one weight map per document. Keeping the phases
// separate (rather than mutating a shared table as documents arrive) makes
// the result independent of ingestion order and safe to parallelize later.
//
// Weight: tf × ln(n_docs / df). A term present in every document scores
// zero; a term unique to one document gets the maximal ln(n_docs) factor.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tracing::debug;

use super::traits::Vectorizer;
use super::{DocVector, VectorizeError};

/// Corpus-relative term weighting. Deterministic, no external calls; the only
/// failure mode is an empty batch.
pub struct TfIdfVectorizer;

#[async_trait]
impl Vectorizer for TfIdfVectorizer {
    async fn vectorize_batch(&self, contents: &[String]) -> Result<Vec<DocVector>, VectorizeError> {
        if contents.is_empty() {
            return Err(VectorizeError::EmptyBatch);
        }

        let tokenized: Vec<Vec<&str>> = contents
            .iter()
            .map(|c| c.split_whitespace().collect())
            .collect();

        // Phase 1: document frequency of every vocabulary term.
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().copied().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = contents.len() as f64;
        debug!(
            documents = contents.len(),
            vocabulary = doc_freq.len(),
            "Computed corpus statistics"
        );

        // Phase 2: per-document tf × idf weights against the shared corpus.
        let vectors = tokenized
            .iter()
            .map(|tokens| {
                let mut term_counts: HashMap<&str, f64> = HashMap::new();
                for term in tokens {
                    *term_counts.entry(term).or_insert(0.0) += 1.0;
                }

                let weights = term_counts
                    .into_iter()
                    .map(|(term, tf)| {
                        let df = doc_freq[term] as f64;
                        (term.to_string(), tf * (n_docs / df).ln())
                    })
                    .collect();
                DocVector::Sparse(weights)
            })
            .collect();

        Ok(vectors)
    }
}
