//! Cached renderings of logical views.
//!
//! Read endpoints render a view once and keep the JSON document here, keyed
//! by the logical view path. Mutation actions invalidate the paths their
//! entity appears in; invalidation is fire-and-forget and idempotent, so
//! dropping a path that holds nothing is a no-op.

use std::sync::Arc;

use serde_json::Value;

const MAX_VIEWS: u64 = 64;

#[derive(Clone)]
pub struct ViewCache {
    inner: moka::future::Cache<&'static str, Arc<Value>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self {
            inner: moka::future::Cache::new(MAX_VIEWS),
        }
    }

    pub async fn get(&self, path: &'static str) -> Option<Arc<Value>> {
        self.inner.get(path).await
    }

    /// Store a rendered view and hand back the shared copy.
    pub async fn insert(&self, path: &'static str, rendered: Value) -> Arc<Value> {
        let rendered = Arc::new(rendered);
        self.inner.insert(path, Arc::clone(&rendered)).await;
        rendered
    }

    /// Drop the cached rendering for one view path.
    pub async fn invalidate(&self, path: &'static str) {
        self.inner.invalidate(path).await;
    }

    /// Drop every path in the list. Order carries no meaning.
    pub async fn invalidate_views(&self, paths: &[&'static str]) {
        for path in paths {
            self.invalidate(path).await;
        }
    }

    pub fn contains(&self, path: &'static str) -> bool {
        self.inner.contains_key(path)
    }
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::new()
    }
}
