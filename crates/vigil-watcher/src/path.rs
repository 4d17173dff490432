//! Outbound path and method resolution.

use strum::{AsRefStr, Display, IntoStaticStr};

/// HTTP methods used by the watcher API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Resolved transport coordinates for one outbound request.
///
/// Resolution is deterministic: it depends only on the request kind and its
/// identifying path parameters, never on the body fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPathInfo {
    /// The HTTP method to use.
    pub method: HttpMethod,
    /// The request path relative to the cluster endpoint.
    pub path: String,
}

impl RequestPathInfo {
    /// Creates path info for the given method and path.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}
