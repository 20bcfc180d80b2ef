//! Server health check.

use std::time::Duration;

use anyhow::{Context, Result};

/// GET `{server}/health` and print what came back.
pub fn check(server: &str) -> Result<()> {
    let base = server.trim_end_matches('/');
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    println!("Server:    {}", base);
    match client.get(format!("{}/health", base)).send() {
        Ok(resp) if resp.status().is_success() => {
            let body: serde_json::Value = resp.json().context("health payload is not JSON")?;
            println!("Status:    {}", body["status"].as_str().unwrap_or("unknown"));
            println!("Version:   {}", body["version"].as_str().unwrap_or("-"));
        }
        Ok(resp) => {
            println!("Status:    error ({})", resp.status());
        }
        Err(e) => {
            println!("Status:    disconnected ({})", e);
        }
    }
    Ok(())
}
