/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate piwigo;

use anyhow::{anyhow, Result};
use piwigo::ws::Client;

// Smoke test against a gallery: asks who we are without logging in.
// Usage: cargo run --example session_status -- https://gallery.example.com

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let host = std::env::args()
        .nth(1)
        .ok_or(anyhow!("No gallery address supplied"))?;

    let client = Client::new(&host)?;
    let status = client.session_status().await?;
    println!(
        "Connected to {} (Piwigo {}) as {} ({:?})",
        client.host(),
        status.version,
        status.username,
        status.status
    );
    Ok(())
}
