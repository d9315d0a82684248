//! Process-wide client handle
//!
//! The handle is built at most once per process and shared read-only after
//! that. There is no teardown; it lives until the process exits.
//!
//! ```rust,no_run
//! let client = supabase_handle::supabase()?;
//! assert!(std::ptr::eq(client, supabase_handle::supabase()?));
//! # Ok::<(), supabase_handle::ApiError>(())
//! ```

use crate::client::SupabaseClient;
use crate::config::{ClientConfig, ConfigSource, ProcessEnv};
use crate::error::ApiResult;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

static CLIENT: OnceCell<SupabaseClient> = OnceCell::new();

/// Resolve configuration from `source` and build a client
///
/// Errors from the constructor are returned as-is.
pub fn create_client(source: &impl ConfigSource) -> ApiResult<SupabaseClient> {
    SupabaseClient::with_config(ClientConfig::from_source(source))
}

/// The shared client, built from the process environment on first access
///
/// A failed construction leaves the handle unset and returns the error; the
/// next call resolves and constructs again.
pub fn supabase() -> ApiResult<&'static SupabaseClient> {
    CLIENT.get_or_try_init(|| {
        let client = create_client(&ProcessEnv)?;
        let from = client.config().resolved_from;
        debug!(
            url = %client.url(),
            url_from = %from.url,
            anon_key_from = %from.anon_key,
            "Initialized shared Supabase client"
        );
        Ok(client)
    })
}

/// Install the shared client from an explicit configuration
///
/// If the handle already exists it is returned unchanged and `config` is
/// dropped.
pub fn init(config: ClientConfig) -> ApiResult<&'static SupabaseClient> {
    if let Some(existing) = CLIENT.get() {
        warn!(url = %existing.url(), "Shared Supabase client already initialized, ignoring new config");
        return Ok(existing);
    }

    CLIENT.get_or_try_init(move || {
        debug!(url = %config.url, "Initializing shared Supabase client from explicit config");
        SupabaseClient::with_config(config)
    })
}

/// The shared client if it has been built, without building it
#[must_use]
pub fn get() -> Option<&'static SupabaseClient> {
    CLIENT.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SUPABASE_ANON_KEY, DEFAULT_SUPABASE_URL};
    use std::collections::HashMap;

    #[test]
    fn test_create_client_passes_values_through() {
        let source: HashMap<String, String> = [
            ("SUPABASE_URL".to_string(), "https://a.supabase.co".to_string()),
            ("SUPABASE_ANON_KEY".to_string(), "b".to_string()),
        ]
        .into_iter()
        .collect();

        let client = create_client(&source).unwrap();
        assert_eq!(client.url(), "https://a.supabase.co");
        assert_eq!(client.anon_key(), "b");
    }

    #[test]
    fn test_create_client_defaults() {
        let client = create_client(&HashMap::<String, String>::new()).unwrap();
        assert_eq!(client.url(), DEFAULT_SUPABASE_URL);
        assert_eq!(client.anon_key(), DEFAULT_SUPABASE_ANON_KEY);
    }

    #[test]
    fn test_create_client_propagates_errors() {
        let source: HashMap<String, String> =
            [("SUPABASE_URL".to_string(), "not a url".to_string())]
                .into_iter()
                .collect();

        assert!(create_client(&source).unwrap_err().is_construction_error());
    }
}
