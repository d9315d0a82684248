//! Explicit startup initialization of the shared handle

use std::time::Duration;
use supabase_handle::global;
use supabase_handle::{supabase, ClientConfig, ValueSource};

#[test]
fn test_init_then_access() {
    assert!(global::get().is_none());

    let config = ClientConfig::new("http://localhost:54321", "local-anon-key")
        .with_timeout(Duration::from_secs(5));
    let installed = global::init(config).unwrap();

    assert_eq!(installed.url(), "http://localhost:54321");
    assert_eq!(installed.config().resolved_from.url, ValueSource::Explicit);
    assert!(std::ptr::eq(installed, supabase().unwrap()));

    let again = global::init(ClientConfig::new("https://other.supabase.co", "other")).unwrap();
    assert!(std::ptr::eq(installed, again));
    assert_eq!(again.anon_key(), "local-anon-key");
}
