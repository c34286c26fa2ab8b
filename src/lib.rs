/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Piwigo
//!
//! This library was created for working with the [Piwigo](https://piwigo.org)
//! photo gallery web service interface (`ws.php`).
//!
//! For further details on the individual methods refer to the
//! [Piwigo Web API docs](https://piwigo.org/doc/doku.php?id=dev:webapi) or the
//! API explorer every gallery ships at `tools/ws.htm`.
//!
//! ## Features
//!
//! - Session handling (login/logout/status) over the gallery's cookie sessions
//! - Category and tag listings
//! - Paged image listings by category, tag, favorites, or search
//! - Favorite mutation, image rating, and image metadata editing
//! - Lower level interface for handling the raw communication
//!
//! *Authentication is username/password against the gallery itself; the
//! session cookie the server issues is kept by the client for the calls that
//! follow.*
//!
//! *If you want to use this library for more than is currently implemented,
//! [`ws::Client::send`] is a way to make request/responses in a more direct
//! way; every method name the service understands is listed in
//! [`ws::Method`].*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! piwigo = "0.2.0"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use piwigo::ws::{Client, ListingProps, PiwigoError};
//!
//! async fn newest_images(host: &str, username: &str, password: &str) -> Result<(), PiwigoError> {
//!     // The gallery address is fixed per client instance.
//!     let client = Client::new(host)?;
//!
//!     // The session cookie is held by the client after a successful login.
//!     client.login(username, password).await?;
//!
//!     // Albums visible to this user.
//!     for category in client.categories(None, &Default::default()).await? {
//!         println!("{}: {}", category.id, category.name);
//!     }
//!
//!     // First page of the newest images, gallery wide.
//!     let listing = client
//!         .category_images(None, true, &ListingProps::default())
//!         .await?;
//!     for image in listing.images {
//!         println!("{} {}", image.id, image.file);
//!     }
//!
//!     client.logout().await
//! }
//! ```
//!
pub mod ws;
