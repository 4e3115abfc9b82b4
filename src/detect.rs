// All-pairs duplicate detection over a vectorized batch.
//
// Quadratic by design — batches are tens of documents. The enumeration order
// (increasing i, then increasing j, with i < j) is part of the contract, so a
// sub-quadratic candidate-generation strategy could be dropped in later
// without changing what gets reported.

use serde::Serialize;
use tracing::info;

use crate::similarity::cosine;
use crate::vectorize::DocVector;

/// One reported near-duplicate pair. Titles identify the documents (the
/// batch has no stable ids); the score is rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicatePair {
    pub title_a: String,
    pub title_b: String,
    pub score: f64,
}

/// Ordered report of every pair at or above the threshold.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DuplicateReport {
    pub pairs: Vec<DuplicatePair>,
    pub documents_scanned: usize,
}

impl DuplicateReport {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Score every unordered pair and keep those meeting the threshold
/// (inclusive). Batches of size 0 or 1 produce an empty report.
pub fn detect(titles: &[String], vectors: &[DocVector], threshold: f64) -> DuplicateReport {
    debug_assert_eq!(titles.len(), vectors.len());

    let mut pairs = Vec::new();

    for i in 0..vectors.len() {
        for j in (i + 1)..vectors.len() {
            let score = cosine(&vectors[i], &vectors[j]);
            if score >= threshold {
                pairs.push(DuplicatePair {
                    title_a: titles[i].clone(),
                    title_b: titles[j].clone(),
                    score: round2(score),
                });
            }
        }
    }

    info!(
        documents = vectors.len(),
        duplicates = pairs.len(),
        threshold,
        "Duplicate detection finished"
    );

    DuplicateReport {
        pairs,
        documents_scanned: vectors.len(),
    }
}

fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn dense(values: &[f64]) -> DocVector {
        DocVector::Dense(values.to_vec())
    }

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_batch_yields_empty_report() {
        let report = detect(&[], &[], 0.85);
        assert!(report.is_empty());
        assert_eq!(report.documents_scanned, 0);
    }

    #[test]
    fn test_single_document_yields_empty_report() {
        let report = detect(&titles(&["A"]), &[dense(&[1.0, 0.0])], 0.0);
        assert!(report.is_empty());
        assert_eq!(report.documents_scanned, 1);
    }

    #[test]
    fn test_identical_pair_reported() {
        let report = detect(
            &titles(&["A", "B"]),
            &[dense(&[3.0, 4.0]), dense(&[3.0, 4.0])],
            0.85,
        );
        assert_eq!(
            report.pairs,
            vec![DuplicatePair {
                title_a: "A".to_string(),
                title_b: "B".to_string(),
                score: 1.0,
            }]
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // Identical vectors score exactly 1.0; a threshold of 1.0 keeps them.
        let report = detect(
            &titles(&["A", "B"]),
            &[dense(&[3.0, 4.0]), dense(&[3.0, 4.0])],
            1.0,
        );
        assert_eq!(report.pairs.len(), 1);
    }

    #[test]
    fn test_below_threshold_excluded() {
        let report = detect(
            &titles(&["A", "B"]),
            &[dense(&[1.0, 0.0]), dense(&[0.0, 1.0])],
            0.85,
        );
        assert!(report.is_empty());
    }

    #[test]
    fn test_pair_order_and_uniqueness() {
        let v = dense(&[1.0, 0.0]);
        let report = detect(&titles(&["A", "B", "C"]), &[v.clone(), v.clone(), v], 0.5);
        let reported: Vec<(&str, &str)> = report
            .pairs
            .iter()
            .map(|p| (p.title_a.as_str(), p.title_b.as_str()))
            .collect();
        assert_eq!(reported, vec![("A", "B"), ("A", "C"), ("B", "C")]);
    }

    #[test]
    fn test_scores_rounded_to_two_decimals() {
        // cos = 1/sqrt(2) ≈ 0.7071 → reported as 0.71
        let report = detect(
            &titles(&["A", "B"]),
            &[dense(&[1.0, 0.0]), dense(&[1.0, 1.0])],
            0.5,
        );
        assert_eq!(report.pairs[0].score, 0.71);
    }

    #[test]
    fn test_sparse_vectors_supported() {
        let weights: HashMap<String, f64> =
            [("chat".to_string(), 1.0), ("souris".to_string(), 2.0)].into();
        let a = DocVector::Sparse(weights.clone());
        let b = DocVector::Sparse(weights);
        let report = detect(&titles(&["A", "B"]), &[a, b], 0.85);
        assert_eq!(report.pairs.len(), 1);
        assert_eq!(report.pairs[0].score, 1.0);
    }
}
