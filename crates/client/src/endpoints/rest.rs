//! Database (PostgREST) endpoints

use crate::client::SupabaseClient;
use reqwest::{Method, RequestBuilder};

/// Database API interface
#[derive(Clone, Debug)]
pub struct RestApi {
    client: SupabaseClient,
}

impl RestApi {
    pub(crate) fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// URL of a table or view
    #[must_use]
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.client.rest_url(), table.trim_matches('/'))
    }

    /// URL of a Postgres function exposed over RPC
    #[must_use]
    pub fn rpc_url(&self, function: &str) -> String {
        format!("{}/rpc/{}", self.client.rest_url(), function.trim_matches('/'))
    }

    /// Authenticated request against a table; filters are appended by the caller
    pub fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client.request_builder(method, &self.table_url(table))
    }

    /// Authenticated `POST /rpc/{function}` request
    pub fn rpc(&self, function: &str) -> RequestBuilder {
        self.client.request_builder(Method::POST, &self.rpc_url(function))
    }
}
