/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod client;
mod form;
mod parsers;
pub mod api;
pub mod methods;
pub mod session;
pub mod tags;
pub mod categories;
pub mod images;
pub mod sort;
pub mod properties;
pub mod errors;

pub use api::*;
pub use categories::*;
pub use client::*;
pub use errors::*;
pub use images::*;
pub use methods::*;
pub use properties::*;
pub use session::*;
pub use sort::*;
pub use tags::*;
