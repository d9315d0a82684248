//! Show the resolved configuration

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use supabase_handle::{ClientConfig, ResolvedFrom};

#[derive(Serialize)]
struct ConfigOutput {
    url: String,
    anon_key: String,
    timeout_secs: u64,
    resolved_from: ResolvedFrom,
    valid: bool,
    error: Option<String>,
}

/// Print the configuration the shared client would be built from
pub fn run(format: &str) -> Result<()> {
    let config = ClientConfig::from_env();
    let validation = config.validate();

    let output = ConfigOutput {
        url: config.url.clone(),
        anon_key: config.redacted_key(),
        timeout_secs: config.timeout.as_secs(),
        resolved_from: config.resolved_from,
        valid: validation.is_ok(),
        error: validation.as_ref().err().map(ToString::to_string),
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!();
        println!("  {}", "Supabase configuration".blue().bold());
        println!();
        println!("  URL:       {}  {}", output.url, format!("({})", output.resolved_from.url).dimmed());
        println!(
            "  Anon key:  {}  {}",
            output.anon_key,
            format!("({})", output.resolved_from.anon_key).dimmed()
        );
        println!("  Timeout:   {}s", output.timeout_secs);
        println!();
        match &output.error {
            None => println!("  {}", "✓ Valid".green()),
            Some(e) => println!("  {} {e}", "✗ Invalid:".red()),
        }
        println!();
    }

    validation.map_err(Into::into)
}
