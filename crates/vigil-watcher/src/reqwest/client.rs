//! Reqwest-based HTTP client for watch execution.

use std::sync::Arc;

use reqwest::Client;
use url::Url;

use super::{Error, ReqwestConfig, TRACING_TARGET};
use crate::path::HttpMethod;
use crate::{
    ExecuteWatchRequest, ExecuteWatchResponse, ServiceHealth, WatcherProvider, WatcherService,
};

/// Inner client that holds the HTTP client and configuration.
struct ReqwestClientInner {
    http: Client,
    config: ReqwestConfig,
}

/// Reqwest-based client that executes watches against a cluster endpoint.
///
/// This client implements the [`WatcherProvider`] trait: it serializes the
/// request body, resolves the request's path info, and issues the call
/// against the configured endpoint.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_watcher::reqwest::{ReqwestClient, ReqwestConfig};
/// use vigil_watcher::ExecuteWatchRequest;
/// use url::Url;
///
/// let endpoint = Url::parse("https://cluster.example.com:9200")?;
/// let client = ReqwestClient::new(ReqwestConfig::new(endpoint));
///
/// let request = ExecuteWatchRequest::builder("cpu-alert").record_execution().build();
/// let response = client.execute_watch(&request).await?;
/// ```
#[derive(Clone)]
pub struct ReqwestClient {
    inner: Arc<ReqwestClientInner>,
}

impl std::fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestClient {
    /// Creates a new reqwest client with the given configuration.
    pub fn new(config: ReqwestConfig) -> Self {
        let timeout = config.effective_timeout();
        let user_agent = config.effective_user_agent();

        tracing::debug!(
            target: TRACING_TARGET,
            endpoint = %config.endpoint,
            timeout_ms = timeout.as_millis(),
            "Creating reqwest client"
        );

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()
            .expect("failed to create HTTP client");

        let inner = ReqwestClientInner { http, config };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Gets the underlying HTTP client.
    pub(crate) fn http(&self) -> &Client {
        &self.inner.http
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ReqwestConfig {
        &self.inner.config
    }

    /// Converts this client into a [`WatcherService`] for use with dependency injection.
    pub fn into_service(self) -> WatcherService {
        WatcherService::new(self)
    }

    /// Resolves a request path against the configured endpoint.
    fn request_url(&self, path: &str) -> crate::Result<Url> {
        self.config()
            .endpoint
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                crate::Error::configuration()
                    .with_message(format!("invalid request URL for path {path:?}"))
                    .with_source(e)
            })
    }
}

#[async_trait::async_trait]
impl WatcherProvider for ReqwestClient {
    async fn execute_watch(
        &self,
        request: &ExecuteWatchRequest,
    ) -> crate::Result<ExecuteWatchResponse> {
        let path_info = request.path_info();
        let url = self.request_url(&path_info.path)?;

        tracing::debug!(
            target: TRACING_TARGET,
            watch_id = %request.watch_id,
            method = %path_info.method,
            path = %path_info.path,
            "Executing watch"
        );

        let body = serde_json::to_vec(request).map_err(Error::Serde)?;

        let mut http_request = match path_info.method {
            HttpMethod::Get => self.http().get(url),
            HttpMethod::Post => self.http().post(url),
            HttpMethod::Put => self.http().put(url),
            HttpMethod::Delete => self.http().delete(url),
        }
        .header("Content-Type", "application/json");

        if let Some(ref api_key) = self.config().api_key {
            http_request = http_request.header("Authorization", format!("ApiKey {api_key}"));
        }

        let http_response = http_request.body(body).send().await.map_err(Error::from)?;

        let status = http_response.status();
        if !status.is_success() {
            let body = http_response.text().await.unwrap_or_default();
            tracing::debug!(
                target: TRACING_TARGET,
                watch_id = %request.watch_id,
                status = status.as_u16(),
                "Watch execution rejected"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let response: ExecuteWatchResponse =
            http_response.json().await.map_err(Error::from)?;

        tracing::debug!(
            target: TRACING_TARGET,
            watch_id = %request.watch_id,
            record_id = %response.record_id,
            state = response.state().unwrap_or("unknown"),
            "Watch execution completed"
        );

        Ok(response)
    }

    async fn health_check(&self) -> crate::Result<ServiceHealth> {
        // The client is stateless and always healthy if it was created successfully
        Ok(ServiceHealth::healthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(endpoint: &str) -> ReqwestClient {
        ReqwestClient::new(ReqwestConfig::new(Url::parse(endpoint).unwrap()))
    }

    #[test]
    fn test_request_url_against_root_endpoint() {
        let client = client_for("http://localhost:9200");
        let url = client.request_url("/_watcher/watch/cpu-alert/_execute").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9200/_watcher/watch/cpu-alert/_execute"
        );
    }

    #[test]
    fn test_request_url_keeps_endpoint_base_path() {
        let client = client_for("https://gateway.example.com/es/");
        let url = client.request_url("/_watcher/watch/w/_execute").unwrap();
        assert_eq!(
            url.as_str(),
            "https://gateway.example.com/es/_watcher/watch/w/_execute"
        );
    }

    #[test]
    fn test_config_is_retained() {
        let config = ReqwestConfig::new(Url::parse("http://localhost:9200").unwrap())
            .with_timeout(5)
            .with_api_key("key");
        let client = ReqwestClient::new(config);
        assert_eq!(client.config().http_timeout, 5);
        assert_eq!(client.config().api_key.as_deref(), Some("key"));
    }

    #[tokio::test]
    async fn test_health_check_is_healthy() {
        let client = client_for("http://localhost:9200");
        let health = client.health_check().await.unwrap();
        assert!(health.is_operational());
    }
}
