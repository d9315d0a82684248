//! Edge Functions

use crate::client::SupabaseClient;
use crate::error::ApiResult;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Edge Functions API interface
#[derive(Clone, Debug)]
pub struct FunctionsApi {
    client: SupabaseClient,
}

impl FunctionsApi {
    pub(crate) fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// URL of a deployed function
    #[must_use]
    pub fn url(&self, name: &str) -> String {
        format!("{}/{}", self.client.functions_url(), name.trim_matches('/'))
    }

    /// Invoke a function with a JSON body
    pub async fn invoke<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        name: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self
            .client
            .request_builder(Method::POST, &self.url(name))
            .json(body);
        self.client.send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_url() {
        let client = SupabaseClient::new("https://abc.supabase.co", "k").unwrap();
        assert_eq!(
            client.functions().url("hello-world"),
            "https://abc.supabase.co/functions/v1/hello-world"
        );
    }

    #[tokio::test]
    async fn test_invoke_unreachable_propagates_request_error() {
        let client = SupabaseClient::new("http://127.0.0.1:9", "k").unwrap();
        let result: ApiResult<serde_json::Value> =
            client.functions().invoke("hello", &serde_json::json!({})).await;

        assert!(matches!(result, Err(crate::ApiError::Request(_))));
    }
}
