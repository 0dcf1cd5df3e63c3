//! JSON-over-HTTP fetch client.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::CatalogError;

/// HTTP client for read-only JSON endpoints.
///
/// A thin wrapper around `reqwest` that resolves paths against a base URL,
/// attaches default headers, and maps every failure onto [`CatalogError`].
/// There is no timeout or retry here: a failed request is final for that
/// call.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            default_headers: Vec::new(),
        }
    }

    /// Use a preconfigured `reqwest` client (proxy, TLS, user agent).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// The base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn resolve(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url.to_string(),
        }
    }

    /// GET a URL and parse the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let body = self.get_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET a URL and return the raw body of a successful response.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        let url = self.resolve(url);

        let mut request = self.http.get(&url).header("Accept", "application/json");
        for (key, value) in &self.default_headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "catalog request failed");
            CatalogError::Connection(e.to_string())
        })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            warn!(%url, status, "catalog returned an error status");
            return Err(CatalogError::Http { status, url });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Connection(e.to_string()))?;
        debug!(%url, status, bytes = body.len(), "catalog response received");

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_against_base() {
        let client = FetchClient::new().with_base_url("https://fakestoreapi.com/");
        assert_eq!(client.resolve("/products"), "https://fakestoreapi.com/products");
        assert_eq!(
            client.resolve("http://localhost:9000/products"),
            "http://localhost:9000/products"
        );
    }

    #[test]
    fn test_resolve_without_base() {
        let client = FetchClient::new();
        assert_eq!(client.resolve("/products"), "/products");
        assert!(client.base_url().is_none());
    }
}
