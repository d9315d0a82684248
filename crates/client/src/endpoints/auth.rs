//! Auth (GoTrue) endpoints

use crate::client::SupabaseClient;
use crate::error::ApiResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Auth API interface
#[derive(Clone, Debug)]
pub struct AuthApi {
    client: SupabaseClient,
}

impl AuthApi {
    pub(crate) fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// URL of an auth endpoint
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.client.auth_url(), path.trim_start_matches('/'))
    }

    /// Check health of the auth service
    pub async fn health(&self) -> ApiResult<AuthHealth> {
        let request = self.client.request_builder(Method::GET, &self.url("health"));
        self.client.send_json(request).await
    }

    /// Fetch the project's public auth settings
    pub async fn settings(&self) -> ApiResult<AuthSettings> {
        let request = self.client.request_builder(Method::GET, &self.url("settings"));
        self.client.send_json(request).await
    }
}

/// Health response from GoTrue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthHealth {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
}

/// Public auth settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Enabled external providers
    #[serde(default)]
    pub external: HashMap<String, bool>,
    /// Whether new sign-ups are disabled
    #[serde(default)]
    pub disable_signup: bool,
    /// Whether email confirmation is skipped
    #[serde(default)]
    pub mailer_autoconfirm: bool,
}
