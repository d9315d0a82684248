//! Probe the configured project

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::time::Instant;
use supabase_handle::{supabase, SupabaseClient};

#[derive(Serialize)]
struct ProbeResult {
    service: &'static str,
    url: String,
    status_code: Option<u16>,
    response_time_ms: u128,
    healthy: bool,
    error: Option<String>,
}

/// Probe auth health and the REST root through the shared client
pub async fn run(timing: bool, format: &str) -> Result<()> {
    let client = supabase()?;

    let targets = [
        ("auth", client.auth().url("health")),
        ("rest", format!("{}/", client.rest_url())),
    ];

    let mut results = Vec::with_capacity(targets.len());
    for (service, url) in targets {
        results.push(probe(client, service, url).await);
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!();
        println!("  {} {}", "Checking".blue().bold(), client.url());
        println!();
        for result in &results {
            let time_str = if timing {
                format!(" ({}ms)", result.response_time_ms)
            } else {
                String::new()
            };
            let label = format!("{}:", result.service);
            if result.healthy {
                println!("  {label:<8}{}{}", "✓ OK".green(), time_str.dimmed());
            } else {
                let detail = result
                    .error
                    .clone()
                    .or_else(|| result.status_code.map(|s| format!("HTTP {s}")))
                    .unwrap_or_default();
                println!("  {label:<8}{} {detail}", "✗ Error".red());
            }
        }
        println!();
    }

    let failed = results.iter().filter(|r| !r.healthy).count();
    if failed > 0 {
        bail!("{failed} of {} services unhealthy", results.len());
    }
    Ok(())
}

async fn probe(client: &SupabaseClient, service: &'static str, url: String) -> ProbeResult {
    let start = Instant::now();
    let response = client
        .request_builder(reqwest::Method::GET, &url)
        .send()
        .await;
    let elapsed = start.elapsed().as_millis();

    tracing::debug!(service, url = %url, elapsed_ms = elapsed, "Probe finished");

    match response {
        Ok(response) => ProbeResult {
            service,
            url,
            status_code: Some(response.status().as_u16()),
            response_time_ms: elapsed,
            healthy: response.status().is_success(),
            error: None,
        },
        Err(e) => ProbeResult {
            service,
            url,
            status_code: None,
            response_time_ms: elapsed,
            healthy: false,
            error: Some(e.to_string()),
        },
    }
}
