//! Process-wide Supabase client handle
//!
//! This crate resolves a Supabase project URL and anon key from the
//! environment, builds one client from them and shares it for the life of the
//! process.
//!
//! # Configuration
//!
//! | Variable | Fallback |
//! |----------|----------|
//! | `SUPABASE_URL`, `VITE_SUPABASE_URL` | [`DEFAULT_SUPABASE_URL`] |
//! | `SUPABASE_ANON_KEY`, `VITE_SUPABASE_ANON_KEY` | [`DEFAULT_SUPABASE_ANON_KEY`] |
//! | `SUPABASE_TIMEOUT_SECS` | 30 seconds |
//!
//! Empty or whitespace-only values are treated as unset.
//!
//! # Example
//!
//! ```rust,no_run
//! use supabase_handle::supabase;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = supabase()?;
//!
//!     let health = client.auth().health().await?;
//!     println!("{} {}", health.name, health.version);
//!
//!     let rows: serde_json::Value = client
//!         .send_json(client.rest().request(reqwest::Method::GET, "profiles"))
//!         .await?;
//!     println!("{rows}");
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod global;

pub use client::SupabaseClient;
pub use config::{
    ClientConfig, ConfigSource, ProcessEnv, ResolvedFrom, ValueSource, DEFAULT_SUPABASE_ANON_KEY,
    DEFAULT_SUPABASE_URL,
};
pub use error::{ApiError, ApiResult};
pub use global::{create_client, supabase};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::SupabaseClient;
    pub use crate::config::{ClientConfig, ConfigSource, ProcessEnv};
    pub use crate::endpoints::{AuthApi, FunctionsApi, RestApi, StorageApi};
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::global::{create_client, supabase};
}
