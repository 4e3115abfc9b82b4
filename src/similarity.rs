// Cosine similarity over document vectors.
//
// Written once against DocVector's dot product and norm, so the sparse and
// dense representations score through the same code path. Returns 0.0 (never
// NaN) whenever no similarity can be established: zero magnitude on either
// side, mismatched dense lengths, or mismatched representation kinds.

use crate::vectorize::DocVector;

/// Cosine of the angle between two document vectors. Pure, deterministic and
/// symmetric; the result is in [-1, 1], and in [0, 1] for the non-negative
/// weights the TF-IDF path produces.
pub fn cosine(a: &DocVector, b: &DocVector) -> f64 {
    let dot = match (a, b) {
        (DocVector::Sparse(wa), DocVector::Sparse(wb)) => {
            // Terms absent from either side contribute zero, so iterating one
            // map and probing the other covers the whole key union.
            wa.iter()
                .map(|(term, weight)| weight * wb.get(term).copied().unwrap_or(0.0))
                .sum::<f64>()
        }
        (DocVector::Dense(va), DocVector::Dense(vb)) => {
            if va.len() != vb.len() {
                return 0.0;
            }
            va.iter().zip(vb.iter()).map(|(x, y)| x * y).sum::<f64>()
        }
        _ => return 0.0,
    };

    let denom = norm(a) * norm(b);
    if denom < f64::EPSILON {
        0.0
    } else {
        dot / denom
    }
}

/// Euclidean norm over a vector's own weights.
fn norm(vector: &DocVector) -> f64 {
    match vector {
        DocVector::Sparse(weights) => weights.values().map(|w| w * w).sum::<f64>().sqrt(),
        DocVector::Dense(values) => values.iter().map(|v| v * v).sum::<f64>().sqrt(),
    }
}
