/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::ws::properties::{SortDirection, SortField};
use std::str::FromStr;

/// One (column, direction) ordering preference for an image listing.
///
/// The field is kept as a plain string so preferences coming from user
/// input survive untouched until [`order_token`] filters them against the
/// recognized columns; [`SortSpec::by`]/[`SortSpec::by_direction`] build
/// well-formed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: Option<String>,
}

impl SortSpec {
    /// Preference on a column, server-chosen direction.
    pub fn by(field: SortField) -> Self {
        Self {
            field: <&str>::from(field).to_string(),
            direction: None,
        }
    }

    /// Preference with an explicit direction.
    pub fn by_direction(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: <&str>::from(field).to_string(),
            direction: Some(<&str>::from(direction).to_string()),
        }
    }
}

/// The documented default ordering: availability date, newest first.
pub fn default_sort() -> Vec<SortSpec> {
    vec![SortSpec::by_direction(
        SortField::DateAvailable,
        SortDirection::Descending,
    )]
}

/// Reduces ordering preferences to the single `order` token list the
/// service understands, or `None` when the parameter should be left out
/// so the server default applies.
///
/// A `random` entry anywhere wins outright and discards the rest.
/// Preferences naming unrecognized columns are dropped; directions are
/// normalized case-insensitively to `ASC`/`DESC` and unrecognized ones
/// fall back to the bare column name. Nothing surviving means `None`,
/// never an empty string.
pub fn order_token(sorting: Option<&[SortSpec]>) -> Option<String> {
    let sorting = sorting?;

    let random: &str = SortField::Random.into();
    if sorting.iter().any(|spec| spec.field == random) {
        return Some(random.to_string());
    }

    let tokens: Vec<String> = sorting
        .iter()
        .filter(|spec| SortField::from_str(&spec.field).is_ok())
        .map(|spec| {
            let direction = spec
                .direction
                .as_deref()
                .and_then(|d| SortDirection::from_str(d).ok());
            match direction {
                Some(direction) => format!("{} {}", spec.field, <&str>::from(direction)),
                None => spec.field.clone(),
            }
        })
        .collect();

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_collapses_the_whole_sort() {
        let sorting = vec![
            SortSpec::by(SortField::Random),
            SortSpec::by_direction(SortField::Id, SortDirection::Ascending),
        ];
        assert_eq!(order_token(Some(&sorting)), Some("random".to_string()));
    }

    #[test]
    fn unrecognized_fields_are_dropped() {
        let sorting = vec![SortSpec {
            field: "bogus".to_string(),
            direction: None,
        }];
        assert_eq!(order_token(Some(&sorting)), None);
    }

    #[test]
    fn directions_append_and_bare_fields_stay_bare() {
        let sorting = vec![
            SortSpec::by_direction(SortField::Id, SortDirection::Descending),
            SortSpec::by(SortField::Name),
        ];
        assert_eq!(order_token(Some(&sorting)), Some("id DESC, name".to_string()));
    }

    #[test]
    fn directions_normalize_case_insensitively() {
        let sorting = vec![SortSpec {
            field: "id".to_string(),
            direction: Some("desc".to_string()),
        }];
        assert_eq!(order_token(Some(&sorting)), Some("id DESC".to_string()));
    }

    #[test]
    fn unrecognized_directions_fall_back_to_the_bare_field() {
        let sorting = vec![SortSpec {
            field: "id".to_string(),
            direction: Some("sideways".to_string()),
        }];
        assert_eq!(order_token(Some(&sorting)), Some("id".to_string()));
    }

    #[test]
    fn explicit_no_sorting_marker_omits_the_parameter() {
        assert_eq!(order_token(None), None);
    }

    #[test]
    fn an_empty_sort_omits_the_parameter() {
        assert_eq!(order_token(Some(&[])), None);
    }

    #[test]
    fn the_default_sort_is_availability_date_descending() {
        let sorting = default_sort();
        assert_eq!(
            order_token(Some(&sorting)),
            Some("date_available DESC".to_string())
        );
    }
}
