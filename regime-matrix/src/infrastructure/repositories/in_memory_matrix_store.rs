use crate::application::ports::MatrixStore;
use crate::domain::MatrixSnapshot;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory holder of the current matrix snapshot
///
/// Replacing swaps a single `Arc` under a write lock, so readers always get a
/// complete snapshot. Clones share the same slot.
pub struct InMemoryMatrixStore {
    current: Arc<RwLock<Option<Arc<MatrixSnapshot>>>>,
}

impl InMemoryMatrixStore {
    pub fn new() -> Self {
        InMemoryMatrixStore {
            current: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for InMemoryMatrixStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryMatrixStore {
    fn clone(&self) -> Self {
        InMemoryMatrixStore {
            current: Arc::clone(&self.current),
        }
    }
}

#[async_trait]
impl MatrixStore for InMemoryMatrixStore {
    async fn current(&self) -> Option<Arc<MatrixSnapshot>> {
        self.current.read().clone()
    }

    async fn replace(&self, snapshot: MatrixSnapshot) -> Arc<MatrixSnapshot> {
        let snapshot = Arc::new(snapshot);
        let previous = self.current.write().replace(Arc::clone(&snapshot));
        if let Some(previous) = previous {
            tracing::debug!(previous = %previous.id, current = %snapshot.id, "Snapshot superseded");
        }
        snapshot
    }
}
