//! Per-service accessors on top of [`SupabaseClient`](crate::SupabaseClient)
//!
//! | Module | Service | Base path |
//! |--------|---------|-----------|
//! | `auth` | GoTrue | `/auth/v1` |
//! | `rest` | PostgREST | `/rest/v1` |
//! | `storage` | Storage | `/storage/v1` |
//! | `functions` | Edge Functions | `/functions/v1` |
//!
//! These only address the services with the handle's credentials; query
//! building and session management stay with the caller.

pub mod auth;
pub mod functions;
pub mod rest;
pub mod storage;

pub use auth::AuthApi;
pub use functions::FunctionsApi;
pub use rest::RestApi;
pub use storage::StorageApi;
