//! The request layer: one authenticated HTTP exchange per call.
//!
//! For every request the client reads the active tenant from the
//! [`TenantStore`] at execution time, asks the [`TokenProvider`] for a token
//! scoped to it, and sends against the single configured origin. Two result
//! levels are exposed: [`ApiClient::send`] returns the raw response for
//! callers that need custom error text, and [`ApiClient::json`] /
//! [`ApiClient::empty`] decode or fail.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::page::{ListQuery, Paginated};
use devver_auth::TokenProvider;
use devver_tenant::TenantStore;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Body of an outbound request.
///
/// Multipart bodies pass through untouched so the transport sets the
/// `multipart/form-data` boundary itself; JSON bodies are serialized here and
/// tagged `Content-Type: application/json`.
#[derive(Debug)]
pub enum RequestBody {
    /// Structured value, sent as JSON.
    Json(serde_json::Value),

    /// File-bearing payload, sent as multipart form data.
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    /// JSON body from any serializable value.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }
}

/// Organization-scoped authenticated client for the Devver backend.
///
/// Cheap to clone; clones share the HTTP connection pool, the tenant store,
/// and the token provider. The client performs no retries itself — retry
/// policy belongs to callers (see [`crate::retry`]).
#[derive(Clone)]
pub struct ApiClient {
    /// HTTP client instance.
    http: Client,

    /// Backend origin and token resource configuration.
    config: ApiConfig,

    /// Source of the active organization id, read per request.
    tenant: Arc<TenantStore>,

    /// Token acquisition capability, injected by the identity integration.
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Create a new client.
    pub fn new(config: ApiConfig, tenant: Arc<TenantStore>, tokens: Arc<dyn TokenProvider>) -> Self {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            config,
            tenant,
            tokens,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send one request and return the raw response.
    ///
    /// The response status is not inspected; callers needing the
    /// decode-or-fail behavior use [`json`](Self::json) or
    /// [`empty`](Self::empty). Caller-supplied `headers` are merged last and
    /// override computed ones.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        headers: Option<HeaderMap>,
    ) -> Result<Response, ApiError> {
        self.send_with_query(method, path, &[], body, headers).await
    }

    /// Like [`send`](Self::send), with list-query parameters appended.
    #[instrument(skip(self, query, body, headers), fields(method = %method, path = path))]
    pub async fn send_with_query(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<RequestBody>,
        headers: Option<HeaderMap>,
    ) -> Result<Response, ApiError> {
        // Step 1-2: tenant is read now, not when this future was created, so
        // the newest user selection wins over older in-flight call sites.
        let mut computed = self.auth_headers().await;

        let mut request = self.http.request(method, self.config.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }

        match body {
            Some(RequestBody::Multipart(form)) => {
                // The transport sets the multipart content type and boundary.
                request = request.multipart(form);
            }
            Some(RequestBody::Json(value)) => {
                let bytes = serde_json::to_vec(&value)?;
                computed.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                request = request.body(bytes);
            }
            None => {}
        }

        if let Some(extra) = headers {
            for (name, value) in extra.iter() {
                computed.insert(name, value.clone());
            }
        }

        let response = request.headers(computed).send().await?;
        debug!(status = response.status().as_u16(), "API response");
        Ok(response)
    }

    /// Send one request and decode the JSON response.
    ///
    /// Any non-2xx status becomes [`ApiError::Status`] carrying the
    /// best-effort body text; a 2xx body that does not match `T` becomes
    /// [`ApiError::Decode`].
    pub async fn json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        headers: Option<HeaderMap>,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, body, headers).await?;
        Self::decode(response).await
    }

    /// Send one request expecting an empty success body (delete endpoints).
    pub async fn empty(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<(), ApiError> {
        let response = self.send(method, path, body, None).await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Fetch one page of a list endpoint.
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<Paginated<T>, ApiError> {
        let response = self
            .send_with_query(Method::GET, path, &query.to_pairs(), None, None)
            .await?;
        Self::decode(response).await
    }

    /// Compute auth headers for one request.
    ///
    /// An absent token is not an error: the request goes out without an
    /// `Authorization` header and the backend's 401 surfaces as an ordinary
    /// status failure.
    async fn auth_headers(&self) -> HeaderMap {
        let tenant = self.tenant.active();
        let token = self
            .tokens
            .access_token(&self.config.resource_indicator, tenant.as_ref())
            .await;

        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    warn!("access token is not a valid header value, sending unauthenticated");
                }
            }
        }
        headers
    }

    /// Pass 2xx responses through; turn anything else into a status error.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(status = status.as_u16(), %message, "API error response");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Decode a checked response body as JSON.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("tenant", &self.tenant)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devver_auth::StaticTokenProvider;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(
            ApiConfig::default(),
            Arc::new(TenantStore::in_memory()),
            Arc::new(StaticTokenProvider::new("tok")),
        );
        assert_eq!(client.config().timeout_secs, 30);
    }

    #[test]
    fn test_json_body_from_value() {
        let body = RequestBody::json(&serde_json::json!({"name": "acme"})).unwrap();
        match body {
            RequestBody::Json(value) => assert_eq!(value["name"], "acme"),
            RequestBody::Multipart(_) => panic!("expected a JSON body"),
        }
    }
}
