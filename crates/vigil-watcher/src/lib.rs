#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod service;

pub mod mode;
pub mod path;
pub mod request;
pub mod response;
pub mod trigger;

#[cfg(feature = "reqwest")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest")))]
pub mod reqwest;

pub use vigil_core::{Error, ErrorKind, Result, ServiceHealth, ServiceStatus};

pub use mode::{ActionExecutionMode, SimulatedActions};
pub use path::{HttpMethod, RequestPathInfo};
pub use request::{ActionModes, ExecuteWatchBuilder, ExecuteWatchRequest, InputMap};
pub use response::ExecuteWatchResponse;
pub use service::WatcherService;
pub use trigger::{ScheduleTriggerEvent, TriggerEventBuilder, TriggerEventContainer};

/// Tracing target for watcher operations.
pub const TRACING_TARGET: &str = "vigil_service::watcher";

/// Core trait for watcher execution operations.
///
/// Implement this trait to create custom watcher providers.
#[async_trait::async_trait]
pub trait WatcherProvider: Send + Sync {
    /// Executes a watch on demand and returns the resulting watch record.
    async fn execute_watch(&self, request: &ExecuteWatchRequest) -> Result<ExecuteWatchResponse>;

    /// Performs a health check on the watcher provider.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
