use crate::domain::MatrixSnapshot;
use async_trait::async_trait;
use std::sync::Arc;

/// Holder of the single "current" matrix snapshot
///
/// Replacing is wholesale and atomic with respect to readers: a reader sees
/// either the previous snapshot or the new one, never a mix. Last write wins.
#[async_trait]
pub trait MatrixStore: Send + Sync {
    /// The current snapshot, if any matrix was computed yet
    async fn current(&self) -> Option<Arc<MatrixSnapshot>>;

    /// Make `snapshot` current, returning the shared handle now being served
    async fn replace(&self, snapshot: MatrixSnapshot) -> Arc<MatrixSnapshot>;
}
