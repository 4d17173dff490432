//! Reqwest-based HTTP client for executing watches.
//!
//! This module provides a reqwest-based implementation of the
//! [`WatcherProvider`](crate::WatcherProvider) trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use vigil_watcher::reqwest::{ReqwestClient, ReqwestConfig};
//! use vigil_watcher::{ExecuteWatchRequest, WatcherService};
//! use url::Url;
//!
//! let endpoint = Url::parse("https://cluster.example.com:9200")?;
//! let client = ReqwestClient::new(ReqwestConfig::new(endpoint));
//!
//! // Convert to a service for dependency injection
//! let service: WatcherService = client.into_service();
//! ```

mod client;
mod config;
mod error;

pub use client::ReqwestClient;
pub use config::ReqwestConfig;
pub use error::{Error, Result};

/// Tracing target for reqwest client operations.
pub const TRACING_TARGET: &str = "vigil_watcher::reqwest";
