//! Storage endpoints

use crate::client::SupabaseClient;
use crate::error::ApiResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Storage API interface
#[derive(Clone, Debug)]
pub struct StorageApi {
    client: SupabaseClient,
}

impl StorageApi {
    pub(crate) fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// URL of an object, readable with the handle's credentials
    #[must_use]
    pub fn object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/object/{}/{}",
            self.client.storage_url(),
            bucket.trim_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// URL of an object in a public bucket, usable without credentials
    #[must_use]
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/object/public/{}/{}",
            self.client.storage_url(),
            bucket.trim_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// List the buckets visible to the handle
    pub async fn list_buckets(&self) -> ApiResult<Vec<Bucket>> {
        let url = format!("{}/bucket", self.client.storage_url());
        let request = self.client.request_builder(Method::GET, &url);
        self.client.send_json(request).await
    }
}

/// Storage bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bucket {
    /// Bucket ID
    pub id: String,
    /// Bucket name
    pub name: String,
    /// Whether objects are served without auth
    #[serde(default)]
    pub public: bool,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_urls() {
        let client = SupabaseClient::new("https://abc.supabase.co", "k").unwrap();
        let storage = client.storage();

        assert_eq!(
            storage.object_url("avatars", "/u1/me.png"),
            "https://abc.supabase.co/storage/v1/object/avatars/u1/me.png"
        );
        assert_eq!(
            storage.public_url("avatars/", "u1/me.png"),
            "https://abc.supabase.co/storage/v1/object/public/avatars/u1/me.png"
        );
    }

    #[test]
    fn test_bucket_deserialize() {
        let json = r#"[{"id":"avatars","name":"avatars","public":true,"owner":""}]"#;
        let buckets: Vec<Bucket> = serde_json::from_str(json).unwrap();

        assert_eq!(buckets.len(), 1);
        assert!(buckets[0].public);
        assert!(buckets[0].created_at.is_none());
    }

    #[test]
    fn test_list_buckets_unreachable() {
        let client = SupabaseClient::new("http://127.0.0.1:9", "k").unwrap();
        let result = tokio_test::block_on(client.storage().list_buckets());

        assert!(matches!(result, Err(crate::ApiError::Request(_))));
    }
}
