//! Shared handle over a watcher provider.

use std::sync::Arc;

use vigil_core::{Result, ServiceHealth};

use crate::request::ExecuteWatchRequest;
use crate::response::ExecuteWatchResponse;
use crate::WatcherProvider;

/// Cloneable, type-erased handle over a [`WatcherProvider`] implementation.
///
/// Intended for dependency injection: construct a concrete provider once and
/// hand out cheap clones of the service.
#[derive(Clone)]
pub struct WatcherService {
    inner: Arc<dyn WatcherProvider>,
}

impl std::fmt::Debug for WatcherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherService").finish_non_exhaustive()
    }
}

impl WatcherService {
    /// Wraps a concrete provider.
    pub fn new(provider: impl WatcherProvider + 'static) -> Self {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Executes a watch on demand through the underlying provider.
    pub async fn execute_watch(
        &self,
        request: &ExecuteWatchRequest,
    ) -> Result<ExecuteWatchResponse> {
        self.inner.execute_watch(request).await
    }

    /// Performs a health check through the underlying provider.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.inner.health_check().await
    }
}
