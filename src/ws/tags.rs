/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::ws::parsers::*;
use serde::{Deserialize, Serialize};

/// A keyword tag as returned by `pwg.tags.getList` and inside image details.
#[derive(Deserialize, Debug, Clone)]
pub struct Tag {
    #[serde(deserialize_with = "from_number_or_string")]
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub url_name: Option<String>,

    #[serde(default, deserialize_with = "from_optional_datetime")]
    pub lastmodified: Option<chrono::NaiveDateTime>,

    /// Number of images carrying the tag. Absent inside image details.
    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub counter: Option<u64>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub url: Option<String>,
}

/// Acknowledgement for `pwg.tags.add`.
#[derive(Deserialize, Debug)]
pub struct AddedTag {
    #[serde(deserialize_with = "from_number_or_string")]
    pub id: u64,

    #[serde(default)]
    pub info: Option<String>,
}

#[derive(Serialize, Debug)]
pub(crate) struct TagsParams {
    pub(crate) sort_by_counter: bool,
}

#[derive(Serialize, Debug)]
pub(crate) struct AddTagParams<'a> {
    pub(crate) name: &'a str,
}

#[derive(Serialize, Debug)]
pub(crate) struct TagImagesParams {
    pub(crate) tag_id: Vec<u64>,

    pub(crate) tag_mode_and: bool,

    // Experimental on the server side.
    pub(crate) untagged_only: bool,

    pub(crate) per_page: u32,

    pub(crate) page: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) order: Option<String>,
}

// Tag query response
#[derive(Deserialize, Debug)]
pub(crate) struct TagsResponse {
    pub(crate) tags: Vec<Tag>,
}
