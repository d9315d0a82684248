//! Requests against the default project; run with `--features integration`

use supabase_handle::{create_client, ProcessEnv};

#[tokio::test]
#[cfg_attr(not(feature = "integration"), ignore = "needs network access")]
async fn test_auth_health() {
    let client = create_client(&ProcessEnv).unwrap();
    let health = client.auth().health().await.unwrap();

    assert!(!health.version.is_empty());
}

#[tokio::test]
#[cfg_attr(not(feature = "integration"), ignore = "needs network access")]
async fn test_unknown_table_is_client_error() {
    let client = create_client(&ProcessEnv).unwrap();
    let request = client
        .rest()
        .request(reqwest::Method::GET, "table_that_does_not_exist");
    let result: supabase_handle::ApiResult<serde_json::Value> = client.send_json(request).await;

    assert!(result.unwrap_err().is_client_error());
}
