/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Serialize;
use strum_macros::{EnumString, IntoStaticStr};

/// Number of images per page when a listing call does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Columns the image listings can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum SortField {
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "file")]
    File,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "hit")]
    Hit,
    #[strum(serialize = "rating_score")]
    RatingScore,
    #[strum(serialize = "date_created")]
    DateCreated,
    #[strum(serialize = "date_available")]
    DateAvailable,
    #[strum(serialize = "random")]
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum SortDirection {
    #[strum(serialize = "ASC")]
    Ascending,
    #[strum(serialize = "DESC")]
    Descending,
}

/// Derivative sizes the gallery generates for every image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum ThumbnailSize {
    #[strum(serialize = "square")]
    Square,
    #[strum(serialize = "thumb")]
    Thumb,
    #[strum(serialize = "2small")]
    TwoSmall,
    #[strum(serialize = "xsmall")]
    XSmall,
    #[strum(serialize = "small")]
    Small,
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "large")]
    Large,
    #[strum(serialize = "xlarge")]
    XLarge,
    #[strum(serialize = "xxlarge")]
    XXLarge,
}

impl Serialize for ThumbnailSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str((*self).into())
    }
}

/// How a metadata edit treats fields that hold a single value
/// (name, author, creation date, comment).
///
/// The service default is [`SingleValueMode::FillIfEmpty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum SingleValueMode {
    #[default]
    #[strum(serialize = "fill_if_empty")]
    FillIfEmpty,
    #[strum(serialize = "replace")]
    Replace,
}

impl Serialize for SingleValueMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str((*self).into())
    }
}

/// How a metadata edit treats fields that hold multiple values
/// (tags, categories).
///
/// The service default is [`MultiValueMode::Append`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum MultiValueMode {
    #[default]
    #[strum(serialize = "append")]
    Append,
    #[strum(serialize = "replace")]
    Replace,
}

impl Serialize for MultiValueMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str((*self).into())
    }
}

/// Connection status reported for the session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum UserStatus {
    Unknown,
    #[strum(serialize = "guest")]
    Guest,
    #[strum(serialize = "generic")]
    Generic,
    #[strum(serialize = "normal")]
    Normal,
    #[strum(serialize = "admin")]
    Admin,
    #[strum(serialize = "webmaster")]
    Webmaster,
}

/// Visibility of a category. Only present in responses to administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum CategoryStatus {
    Unknown,
    #[strum(serialize = "public")]
    Public,
    #[strum(serialize = "private")]
    Private,
}
