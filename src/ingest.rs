// Batch ingestion from disk.
//
// The scrapers that originally produced these records are out of scope here;
// their stand-in is a JSON array of raw article records. Records with missing
// or blank fields are kept, with placeholder values substituted, so one
// broken source page never shrinks the batch silently.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::document::Document;

/// Load a raw batch from a JSON file: an array of objects with optional
/// `title`, `content`, `source` and `date` string fields.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut documents: Vec<Document> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of articles", path.display()))?;

    for doc in &mut documents {
        doc.fill_placeholders();
    }

    info!(documents = documents.len(), path = %path.display(), "Batch loaded");
    Ok(documents)
}
