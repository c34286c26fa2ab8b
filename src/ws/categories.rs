/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::ws::parsers::*;
use crate::ws::properties::{CategoryStatus, ThumbnailSize};
use serde::{Deserialize, Serialize};

/// An album as returned by `pwg.categories.getList`.
///
/// Counts and dates are only filled in for albums the logged-in user may
/// browse, so most of the record is optional.
#[derive(Deserialize, Debug, Clone)]
pub struct Category {
    #[serde(deserialize_with = "from_number_or_string")]
    pub id: u64,

    pub name: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub comment: Option<String>,

    #[serde(default)]
    pub permalink: Option<String>,

    #[serde(default, deserialize_with = "from_category_status")]
    pub status: Option<CategoryStatus>,

    /// Comma separated ancestry, root first, e.g. `1,5,12`.
    #[serde(default)]
    pub uppercats: Option<String>,

    #[serde(default)]
    pub global_rank: Option<String>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub id_uppercat: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub nb_images: Option<u64>,

    /// Image count including sub-albums.
    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub total_nb_images: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub representative_picture_id: Option<u64>,

    #[serde(default, deserialize_with = "from_optional_datetime")]
    pub date_last: Option<chrono::NaiveDateTime>,

    #[serde(default, deserialize_with = "from_optional_datetime")]
    pub max_date_last: Option<chrono::NaiveDateTime>,

    #[serde(default, deserialize_with = "from_optional_number_or_string")]
    pub nb_categories: Option<u64>,

    #[serde(default)]
    pub url: Option<String>,

    /// Thumbnail of the representative picture, in the requested size.
    #[serde(default)]
    pub tn_url: Option<String>,
}

/// Options for [`Client::categories`](crate::ws::Client::categories).
#[derive(Serialize, Debug, Clone)]
pub struct CategoryListProps {
    pub recursive: bool,

    /// Ask the server to nest sub-albums inside their parents. The typed
    /// wrapper only surfaces the top level of such a response; use
    /// [`Client::send`](crate::ws::Client::send) to decode the full tree.
    pub tree_output: bool,

    pub thumbnail_size: ThumbnailSize,
}

impl Default for CategoryListProps {
    fn default() -> Self {
        Self {
            recursive: false,
            tree_output: false,
            thumbnail_size: ThumbnailSize::Thumb,
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct CategoriesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cat_id: Option<u64>,

    #[serde(flatten)]
    pub(crate) props: CategoryListProps,
}

#[derive(Serialize, Debug)]
pub(crate) struct CategoryImagesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cat_id: Option<u64>,

    pub(crate) recursive: bool,

    pub(crate) per_page: u32,

    pub(crate) page: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) order: Option<String>,
}

// Album query response
#[derive(Deserialize, Debug)]
pub(crate) struct CategoriesResponse {
    pub(crate) categories: Vec<Category>,
}
