/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::ws::parsers::*;
use crate::ws::properties::UserStatus;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub(crate) struct LoginParams<'a> {
    pub(crate) username: &'a str,
    pub(crate) password: &'a str,
}

/// Session information as reported by `pwg.session.getStatus`.
///
/// The service answers this for anonymous visitors too, in which case
/// `username` is `guest` and the upload fields are absent.
#[derive(Deserialize, Debug)]
pub struct SessionStatus {
    pub username: String,

    #[serde(deserialize_with = "from_user_status")]
    pub status: UserStatus,

    pub theme: String,

    pub language: String,

    /// Anti-CSRF token some administrative methods require.
    pub pwg_token: String,

    pub charset: String,

    #[serde(deserialize_with = "from_datetime")]
    pub current_datetime: chrono::NaiveDateTime,

    pub version: String,

    #[serde(default)]
    pub available_sizes: Vec<String>,

    #[serde(default)]
    pub upload_file_types: Option<String>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub upload_form_chunk_size: Option<u64>,
}
