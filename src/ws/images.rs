/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::ws::parsers::*;
use crate::ws::properties::{DEFAULT_PAGE_SIZE, MultiValueMode, SingleValueMode};
use crate::ws::sort::{SortSpec, default_sort};
use crate::ws::tags::Tag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position of a page inside a paginated listing.
#[derive(Deserialize, Debug, Clone)]
pub struct Paging {
    #[serde(deserialize_with = "from_number_or_string")]
    pub page: u64,

    #[serde(deserialize_with = "from_number_or_string")]
    pub per_page: u64,

    /// Number of images on this page.
    #[serde(deserialize_with = "from_number_or_string")]
    pub count: u64,

    /// Number of images across all pages. Older servers omit it.
    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub total_count: Option<u64>,
}

/// One resized rendition of an image.
#[derive(Deserialize, Debug, Clone)]
pub struct Derivative {
    pub url: String,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub width: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub height: Option<u64>,
}

/// An image as it appears in listing responses.
#[derive(Deserialize, Debug, Clone)]
pub struct ImageSummary {
    #[serde(deserialize_with = "from_number_or_string")]
    pub id: u64,

    pub file: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub comment: Option<String>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub width: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub height: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub hit: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_datetime")]
    pub date_creation: Option<chrono::NaiveDateTime>,

    #[serde(default, deserialize_with = "from_optional_datetime")]
    pub date_available: Option<chrono::NaiveDateTime>,

    #[serde(default)]
    pub page_url: Option<String>,

    /// Location of the original file. Only present when the logged-in
    /// user may download originals.
    #[serde(default)]
    pub element_url: Option<String>,

    /// Resized renditions keyed by size name (`square`, `thumb`, ...).
    #[serde(default)]
    pub derivatives: HashMap<String, Derivative>,
}

/// One page of an image listing.
#[derive(Deserialize, Debug)]
pub struct ImageList {
    pub paging: Paging,

    #[serde(default)]
    pub images: Vec<ImageSummary>,
}

/// Rating summary carried inside [`ImageInfo`].
#[derive(Deserialize, Debug, Clone)]
pub struct Rates {
    #[serde(default, deserialize_with = "from_optional_f64_or_string")]
    pub score: Option<f64>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub usersnb: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_f64_or_string")]
    pub average: Option<f64>,
}

/// Album membership entry inside [`ImageInfo`].
#[derive(Deserialize, Debug, Clone)]
pub struct CategoryRef {
    #[serde(deserialize_with = "from_number_or_string")]
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub permalink: Option<String>,

    #[serde(default)]
    pub uppercats: Option<String>,

    #[serde(default)]
    pub global_rank: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

/// Full image details as returned by `pwg.images.getInfo`.
#[derive(Deserialize, Debug)]
pub struct ImageInfo {
    #[serde(deserialize_with = "from_number_or_string")]
    pub id: u64,

    pub file: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub comment: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub author: Option<String>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub width: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub height: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub hit: Option<u64>,

    /// Privacy level, `0` meaning visible to everybody.
    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub level: Option<u64>,

    #[serde(default)]
    pub md5sum: Option<String>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub rotation: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub added_by: Option<u64>,

    /// Size of the original in kilobytes.
    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub filesize: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_datetime")]
    pub date_creation: Option<chrono::NaiveDateTime>,

    #[serde(default, deserialize_with = "from_optional_datetime")]
    pub date_available: Option<chrono::NaiveDateTime>,

    #[serde(default, deserialize_with = "from_optional_datetime")]
    pub date_metadata_update: Option<chrono::NaiveDateTime>,

    #[serde(default, deserialize_with = "from_optional_datetime")]
    pub lastmodified: Option<chrono::NaiveDateTime>,

    #[serde(default)]
    pub page_url: Option<String>,

    #[serde(default)]
    pub element_url: Option<String>,

    #[serde(default)]
    pub derivatives: HashMap<String, Derivative>,

    #[serde(default)]
    pub rates: Option<Rates>,

    #[serde(default)]
    pub categories: Vec<CategoryRef>,

    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Rating summary returned by `pwg.images.rate`.
#[derive(Deserialize, Debug)]
pub struct RatingResult {
    #[serde(default, deserialize_with = "from_optional_f64_or_string")]
    pub score: Option<f64>,

    #[serde(default, deserialize_with = "from_optional_f64_or_string")]
    pub average: Option<f64>,

    #[serde(deserialize_with = "from_number_or_string")]
    pub count: u64,
}

/// Metadata fields settable through
/// [`Client::set_image_info`](crate::ws::Client::set_image_info).
/// Fields left as `None` are not sent and stay untouched on the server.
#[derive(Serialize, Debug, Default, Clone)]
pub struct ImageInfoProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "to_datetime_param"
    )]
    pub date_creation: Option<chrono::NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Comma separated album ids, each optionally followed by a rank
    /// (`12;2`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "to_comma_list"
    )]
    pub tag_ids: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

/// Pagination and ordering shared by the image listing calls.
#[derive(Debug, Clone)]
pub struct ListingProps {
    /// Zero based page index.
    pub page: u32,

    pub per_page: u32,

    /// Sort specs applied in order. `None` leaves the ordering to the
    /// server.
    pub order: Option<Vec<SortSpec>>,
}

impl Default for ListingProps {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_PAGE_SIZE,
            order: Some(default_sort()),
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct ImageIdParams {
    pub(crate) image_id: u64,
}

#[derive(Serialize, Debug)]
pub(crate) struct SetImageInfoParams<'a> {
    pub(crate) image_id: u64,

    #[serde(flatten)]
    pub(crate) props: &'a ImageInfoProps,

    pub(crate) single_value_mode: SingleValueMode,

    pub(crate) multiple_value_mode: MultiValueMode,
}

#[derive(Serialize, Debug)]
pub(crate) struct RateParams {
    pub(crate) image_id: u64,

    pub(crate) rate: u8,
}

#[derive(Serialize, Debug)]
pub(crate) struct SearchParams<'a> {
    pub(crate) query: &'a str,

    pub(crate) per_page: u32,

    pub(crate) page: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) order: Option<String>,
}

#[derive(Serialize, Debug)]
pub(crate) struct FavoritesParams {
    pub(crate) per_page: u32,

    pub(crate) page: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) order: Option<String>,
}
