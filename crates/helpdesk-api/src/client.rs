use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::interceptor::{Interceptor, PassThrough};

/// Client for the helpdesk REST backend.
///
/// One instance holds one connection pool, one base URL and one request
/// deadline. Endpoint methods are grouped by backend area in the
/// `endpoints` modules; each builds a path, attaches an optional body or
/// query, sends a single request and returns the decoded body.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Clone)]
pub struct HelpdeskClient {
    http: reqwest::Client,
    base_url: String,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl HelpdeskClient {
    /// Creates a client with the default interceptor chain.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            interceptors: vec![Arc::new(PassThrough)],
        })
    }

    /// Creates a client for `server` with the API mounted under `/api`.
    pub fn for_server(server: &str) -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_server(
            server,
            crate::config::DEFAULT_API_PREFIX,
        )?)
    }

    /// Appends an interceptor to the chain. Interceptors run in the order
    /// they were added, after the default one.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Base URL all endpoint paths are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send::<()>(Method::GET, path, &[], None).await?;
        decode(&body)
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let body = self.send::<()>(Method::GET, path, query, None).await?;
        decode(&body)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send(Method::POST, path, &[], Some(payload)).await?;
        decode(&body)
    }

    /// POST without a request body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send::<()>(Method::POST, path, &[], None).await?;
        decode(&body)
    }

    pub(crate) async fn put<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send(Method::PUT, path, &[], Some(payload)).await?;
        decode(&body)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send::<()>(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        payload: Option<&B>,
    ) -> Result<String, ApiError> {
        let result = self.dispatch(method, path, query, payload).await;
        if let Err(e) = &result {
            for interceptor in &self.interceptors {
                interceptor.on_error(e);
            }
        }
        result
    }

    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        payload: Option<&B>,
    ) -> Result<String, ApiError> {
        let mut builder = self.http.request(method, self.url(path));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }
        let mut request = builder.build()?;

        tracing::trace!(interceptors = self.interceptors.len(), "Running request hooks");
        for interceptor in &self.interceptors {
            interceptor.on_request(&mut request)?;
        }

        tracing::debug!(method = %request.method(), url = %request.url(), "Sending request");
        let resp = self.http.execute(request).await?;

        let status = resp.status();
        let url = resp.url().clone();
        for interceptor in &self.interceptors {
            interceptor.on_response(status, &url);
        }

        let body = resp.text().await?;
        tracing::debug!(%status, %url, bytes = body.len(), "Received response");

        if !status.is_success() {
            return Err(ApiError::status(status, body));
        }
        Ok(body)
    }
}

impl std::fmt::Debug for HelpdeskClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelpdeskClient")
            .field("base_url", &self.base_url)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

/// Encodes a caller-supplied value as a single path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Empty bodies (204s, `ResponseEntity<Void>`) decode as JSON `null`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Ok(serde_json::from_str("null")?);
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ClientConfig::from_server("http://localhost:8080/", "/api/").unwrap();
        let client = HelpdeskClient::new(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("tickets/1"), "http://localhost:8080/api/tickets/1");
        assert_eq!(client.url("/public/health"), "http://localhost:8080/api/public/health");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("u-100"), "u-100");
        assert_eq!(segment("a b/c"), "a%20b%2Fc");
        assert_eq!(segment("page?x=1"), "page%3Fx%3D1");
    }

    #[test]
    fn test_decode_empty_body() {
        let v: Value = decode("").unwrap();
        assert_eq!(v, Value::Null);
        let v: Option<Vec<i64>> = decode("  ").unwrap();
        assert_eq!(v, None);
        let v: () = decode("").unwrap();
        assert_eq!(v, ());
        assert!(decode::<Vec<i64>>("").is_err());
    }

    #[test]
    fn test_default_chain_has_pass_through() {
        let client = HelpdeskClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.interceptors.len(), 1);
        let client = client.with_interceptor(PassThrough);
        assert_eq!(client.interceptors.len(), 2);
    }
}
