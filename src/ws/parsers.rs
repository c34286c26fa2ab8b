/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::ws::{CategoryStatus, UserStatus};
use serde::de::{self, Deserialize, Deserializer};
use serde::Serializer;
use serde_json::Value;
use std::str::FromStr;

// Gallery timestamps carry no timezone: "YYYY-MM-DD HH:MM:SS".
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Parses user status with unknown values kept rather than rejected
pub fn from_user_status<'de, D>(deserializer: D) -> Result<UserStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    UserStatus::from_str(&s).or(Ok(UserStatus::Unknown))
}

// Parses category status
pub fn from_category_status<'de, D>(deserializer: D) -> Result<Option<CategoryStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(CategoryStatus::from_str(&s)
        .ok()
        .or(Some(CategoryStatus::Unknown)))
}

// Parses strings that may be "" or null and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<String>::deserialize(deserializer)? {
        Some(s) if s.is_empty() => None,
        other => other,
    })
}

// The service emits many counters and ids as either JSON numbers or quoted
// strings depending on version and field, so accept both.
pub fn from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom("expected an unsigned integer")),
        Value::String(s) => s.trim().parse().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "expected number or string, got {other}"
        ))),
    }
}

pub fn from_optional_number_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| de::Error::custom("expected an unsigned integer")),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s.trim().parse().map(Some).map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "expected number or string, got {other}"
        ))),
    }
}

pub fn from_optional_f64_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s.trim().parse().map(Some).map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "expected number or string, got {other}"
        ))),
    }
}

pub fn from_datetime<'de, D>(deserializer: D) -> Result<chrono::NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    chrono::NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT).map_err(de::Error::custom)
}

pub fn from_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<chrono::NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => chrono::NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

// Dates go over the wire in the same shape the service hands back.
pub fn to_datetime_param<S>(
    value: &Option<chrono::NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

// Multi-valued id parameters are one comma separated scalar on the wire,
// not an indexed array.
pub fn to_comma_list<S>(value: &Option<Vec<u64>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ids) => {
            let joined = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            serializer.serialize_str(&joined)
        }
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Lenient {
        #[serde(deserialize_with = "from_number_or_string")]
        id: u64,
        #[serde(default, deserialize_with = "from_optional_number_or_string")]
        count: Option<u64>,
        #[serde(default, deserialize_with = "from_optional_datetime")]
        when: Option<chrono::NaiveDateTime>,
    }

    #[test]
    fn numbers_accept_both_shapes() {
        let n: Lenient = serde_json::from_str(r#"{"id": 7, "count": "12"}"#).unwrap();
        assert_eq!(n.id, 7);
        assert_eq!(n.count, Some(12));

        let s: Lenient = serde_json::from_str(r#"{"id": "7", "count": 12}"#).unwrap();
        assert_eq!(s.id, 7);
        assert_eq!(s.count, Some(12));
    }

    #[test]
    fn optional_number_treats_null_and_empty_as_absent() {
        let v: Lenient = serde_json::from_str(r#"{"id": 1, "count": null}"#).unwrap();
        assert_eq!(v.count, None);
        let v: Lenient = serde_json::from_str(r#"{"id": 1, "count": ""}"#).unwrap();
        assert_eq!(v.count, None);
    }

    #[test]
    fn datetime_uses_the_gallery_format() {
        let v: Lenient =
            serde_json::from_str(r#"{"id": 1, "when": "2024-05-12 08:00:00"}"#).unwrap();
        let when = v.when.unwrap();
        assert_eq!(when.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-05-12 08:00:00");
    }

    #[test]
    fn unrecognized_user_status_falls_back_to_unknown() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(deserialize_with = "from_user_status")]
            status: UserStatus,
        }
        let v: Holder = serde_json::from_str(r#"{"status": "superuser"}"#).unwrap();
        assert_eq!(v.status, UserStatus::Unknown);
        let v: Holder = serde_json::from_str(r#"{"status": "webmaster"}"#).unwrap();
        assert_eq!(v.status, UserStatus::Webmaster);
    }
}
