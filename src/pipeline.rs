// Pipeline orchestration: normalize → vectorize → detect.
//
// The whole batch moves through each stage before the next starts. The
// vectorization barrier is load-bearing — sparse weights depend on corpus
// statistics over every document, and dense vectors must all come from the
// same encoder run. Fail-closed: if vectorization fails there is no partial
// report, but the normalized documents are still usable by callers that
// persist before detecting (the CLI does exactly that).

use anyhow::{Context, Result};
use tracing::info;

use crate::detect::{self, DuplicateReport};
use crate::document::Document;
use crate::normalize::Normalizer;
use crate::vectorize::traits::Vectorizer;

/// Everything a run produces: the batch with normalized content (ready for
/// persistence) and the duplicate report.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub documents: Vec<Document>,
    pub report: DuplicateReport,
}

/// Rewrite each document's content with its normalized form. Infallible —
/// normalization is a pure string transform.
pub fn normalize_batch(mut documents: Vec<Document>, normalizer: &Normalizer) -> Vec<Document> {
    for doc in &mut documents {
        doc.content = normalizer.normalize(&doc.content);
    }
    info!(documents = documents.len(), "Batch normalized");
    documents
}

/// Vectorize an already-normalized batch and score every pair. An empty
/// batch short-circuits to an empty report; vectorization failures abort
/// without a report.
pub async fn detect_duplicates(
    documents: &[Document],
    vectorizer: &dyn Vectorizer,
    threshold: f64,
) -> Result<DuplicateReport> {
    if documents.is_empty() {
        return Ok(DuplicateReport::default());
    }

    let contents: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();
    let vectors = vectorizer
        .vectorize_batch(&contents)
        .await
        .context("vectorization failed for the batch")?;

    let titles: Vec<String> = documents.iter().map(|d| d.title.clone()).collect();
    Ok(detect::detect(&titles, &vectors, threshold))
}

/// Run the full pipeline over a raw batch.
pub async fn run(
    documents: Vec<Document>,
    normalizer: &Normalizer,
    vectorizer: &dyn Vectorizer,
    threshold: f64,
) -> Result<PipelineOutcome> {
    let documents = normalize_batch(documents, normalizer);
    let report = detect_duplicates(&documents, vectorizer, threshold)
        .await
        .context("duplicate detection aborted")?;

    Ok(PipelineOutcome { documents, report })
}
