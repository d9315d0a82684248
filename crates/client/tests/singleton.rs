//! Shared handle behaviour against the real process environment

use supabase_handle::global;
use supabase_handle::{supabase, ClientConfig};

#[test]
fn test_repeated_access_returns_same_handle() {
    let first = supabase().expect("client should build from the environment");
    let second = supabase().expect("client should still be available");

    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, global::get().unwrap()));
}

#[test]
fn test_handle_matches_environment_resolution() {
    let expected = ClientConfig::from_env();
    let client = supabase().unwrap();

    assert_eq!(client.url(), expected.url);
    assert_eq!(client.anon_key(), expected.anon_key);
}

#[test]
fn test_handle_is_shared_across_threads() {
    let here = supabase().unwrap() as *const _ as usize;

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| supabase().unwrap() as *const _ as usize))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), here);
    }
}
