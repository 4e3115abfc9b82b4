// Delimited tabular persistence of normalized documents.
//
// Format matches the downstream consumer's expectations: `;` as the field
// separator, every field double-quoted (embedded quotes doubled), one header
// row. Stray `;` inside field text is replaced by a space before quoting,
// mirroring how the upstream collectors clean extracted text.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::document::Document;

const HEADER: [&str; 4] = ["Title", "Content", "Source", "Publication Date"];

/// Render the batch as CSV text, header row included.
pub fn render(documents: &[Document]) -> String {
    let mut out = String::new();
    out.push_str(&row(&HEADER.map(String::from)));

    for doc in documents {
        out.push_str(&row(&[
            doc.title.clone(),
            doc.content.clone(),
            doc.source.clone(),
            doc.date.clone(),
        ]));
    }

    out
}

/// Write the rendered batch to `path`.
pub fn write_documents(documents: &[Document], path: &Path) -> Result<()> {
    fs::write(path, render(documents))
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(documents = documents.len(), path = %path.display(), "Batch persisted");
    Ok(())
}

fn row(fields: &[String; 4]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| quote(f)).collect();
    format!("{}\n", quoted.join(";"))
}

fn quote(field: &str) -> String {
    let cleaned = field.replace(';', " ");
    format!("\"{}\"", cleaned.replace('"', "\"\""))
}
