//! Helpers shared across Freshdesk API models.
//!
//! Freshdesk is loose about types: list fields come back as `null`, and
//! phone numbers show up as either strings or integers. The deserializers
//! here absorb that so the record structs can stay plain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Arbitrary key/value map used for `custom_fields`.
pub type CustomFields = serde_json::Map<String, serde_json::Value>;

/// A record with a numeric identifier unique within its resource type.
pub trait Record {
    /// The record's identifier.
    fn id(&self) -> i64;
}

/// Sorts records by id, ascending.
pub fn sort_by_id<T: Record>(records: &mut [T]) {
    records.sort_by(|a, b| a.id().cmp(&b.id()));
}

/// Sorts records by creation time, newest first. Records without a
/// timestamp go last.
pub fn sort_newest_first<T, F>(records: &mut [T], created_at: F)
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    records.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
}

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes an optional value that can be either a string or a number
/// into `Option<String>`.
pub(crate) fn deserialize_optional_string_or_int<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct OptionalStringOrIntVisitor;

    impl<'de> Visitor<'de> for OptionalStringOrIntVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("null, a string, or an integer")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }
    }

    deserializer.deserialize_option(OptionalStringOrIntVisitor)
}
