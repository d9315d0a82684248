//! The Supabase client handle

use crate::config::ClientConfig;
use crate::endpoints::{AuthApi, FunctionsApi, RestApi, StorageApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// API key header for Supabase
const APIKEY_HEADER: &str = "apikey";

/// Handle to one Supabase project
///
/// Every request carries the anon key both as `apikey` and as a bearer token,
/// which is what the Supabase gateway expects from an unauthenticated client.
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct SupabaseClient {
    inner: Client,
    base_url: Url,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SupabaseClient {
    /// Create a client for `url` authenticated with `anon_key`
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(ClientConfig::new(url, anon_key))
    }

    /// Create a client from a full configuration
    ///
    /// Performs no network I/O.
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        let base_url = config.parsed_url()?;

        let key = HeaderValue::from_str(&config.anon_key)
            .map_err(|e| ApiError::InvalidApiKey(e.to_string()))?;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|e| ApiError::InvalidApiKey(e.to_string()))?;
        bearer.set_sensitive(true);
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ApiError::config(format!("invalid user agent: {e}")))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(APIKEY_HEADER, key);
        default_headers.insert(AUTHORIZATION, bearer);
        default_headers.insert(USER_AGENT, user_agent);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        debug!(url = %base_url, timeout_secs = config.timeout.as_secs(), "Supabase client created");

        Ok(Self {
            inner,
            base_url,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Project URL as configured
    #[must_use]
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Anon key as configured
    #[must_use]
    pub fn anon_key(&self) -> &str {
        &self.config.anon_key
    }

    /// Underlying HTTP client with the auth headers preset
    #[must_use]
    pub fn http(&self) -> &Client {
        &self.inner
    }

    /// GoTrue base URL
    #[must_use]
    pub fn auth_url(&self) -> String {
        self.service_url("auth/v1")
    }

    /// PostgREST base URL
    #[must_use]
    pub fn rest_url(&self) -> String {
        self.service_url("rest/v1")
    }

    /// Storage base URL
    #[must_use]
    pub fn storage_url(&self) -> String {
        self.service_url("storage/v1")
    }

    /// Edge Functions base URL
    #[must_use]
    pub fn functions_url(&self) -> String {
        self.service_url("functions/v1")
    }

    // -------------------------------------------------------------------------
    // Service accessors
    // -------------------------------------------------------------------------

    /// Access auth endpoints
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access database (PostgREST) endpoints
    #[must_use]
    pub fn rest(&self) -> RestApi {
        RestApi::new(self.clone())
    }

    /// Access storage endpoints
    #[must_use]
    pub fn storage(&self) -> StorageApi {
        StorageApi::new(self.clone())
    }

    /// Access Edge Functions
    #[must_use]
    pub fn functions(&self) -> FunctionsApi {
        FunctionsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP
    // -------------------------------------------------------------------------

    /// Build a request to an absolute URL with a fresh correlation ID
    pub fn request_builder(&self, method: Method, url: &str) -> RequestBuilder {
        let request_id = Uuid::new_v4().to_string();

        self.inner
            .request(method, url)
            .header(X_REQUEST_ID, request_id)
    }

    /// Send a request and deserialize a successful JSON body
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        handle_response(response).await
    }

    fn service_url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }
}

/// Map non-2xx responses to [`ApiError::ApiResponse`] and decode the rest
pub(crate) async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::api_response(status.as_u16(), message))
    }
}
