// Vectorizer trait — swap-ready abstraction.
//
// The sparse-vs-dense choice is made once per run by constructing the right
// implementation; nothing downstream inspects which one is active. Async
// because the embedding backend calls an external service.

use async_trait::async_trait;

use super::{DocVector, VectorizeError};

/// Maps a full batch of normalized article contents to one vector per
/// document, preserving input order. Implementations must consume the whole
/// batch before emitting anything — corpus statistics are global.
#[async_trait]
pub trait Vectorizer: Send + Sync {
    async fn vectorize_batch(&self, contents: &[String]) -> Result<Vec<DocVector>, VectorizeError>;
}
