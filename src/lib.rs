// Gazette: near-duplicate detection for aggregated news articles.
//
// This is the library root. Each module corresponds to a stage of the
// normalization → vectorization → similarity → detection pipeline.

pub mod config;
pub mod detect;
pub mod document;
pub mod ingest;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod vectorize;
