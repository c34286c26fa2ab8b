/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate piwigo;

use anyhow::Result;
use dotenvy::dotenv;
use piwigo::ws::{Client, ListingProps};

// Lists the most recently published images across the whole gallery,
// logging in first when credentials are present so private albums show
// up too.
//
// Expects PIWIGO_HOST, and optionally PIWIGO_USERNAME/PIWIGO_PASSWORD,
// in the environment or a .env file.

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let host = std::env::var("PIWIGO_HOST")?;
    let client = Client::new(&host)?;

    let creds = (
        std::env::var("PIWIGO_USERNAME"),
        std::env::var("PIWIGO_PASSWORD"),
    );
    let logged_in = if let (Ok(username), Ok(password)) = creds {
        client.login(&username, &password).await?;
        true
    } else {
        false
    };

    // Default listing props: first page of 50, newest first.
    let listing = client
        .category_images(None, true, &ListingProps::default())
        .await?;

    let total = listing
        .paging
        .total_count
        .map_or_else(|| "?".to_string(), |n| n.to_string());
    println!(
        "Page {} ({} of {} images)",
        listing.paging.page, listing.paging.count, total
    );
    for image in &listing.images {
        println!(
            "{}\t{}\t{}",
            image.id,
            image
                .date_available
                .map_or_else(String::new, |dt| dt.to_string()),
            image.name.as_deref().unwrap_or(&image.file)
        );
    }

    if logged_in {
        client.logout().await?;
    }
    Ok(())
}
