use std::sync::Arc;

use crate::store::MockDb;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory mock database; every request reads a fresh snapshot.
    pub db: Arc<MockDb>,
}

impl AppState {
    pub fn new(db: MockDb) -> Self {
        Self { db: Arc::new(db) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_one_store() {
        let state = AppState::new(MockDb::new());
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.db, &clone.db));
    }
}
