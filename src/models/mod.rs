//! Records decoded from TheMealDB responses.
//!
//! Both endpoints wrap their payload in the same `{ "meals": [...] }`
//! envelope; [`MealsEnvelope`] decodes it for any record type.

mod dessert;
mod meal;

pub use dessert::Dessert;
pub use meal::{Meal, MAX_INGREDIENT_SLOTS};

use serde::{Deserialize, Deserializer};

/// The `{ "meals": [...] }` wrapper returned by both endpoints.
///
/// The key is required. A `null` value (what the lookup endpoint sends for
/// an unknown id) decodes as an empty list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MealsEnvelope<T> {
    #[serde(deserialize_with = "deserialize_nullable_vec")]
    pub meals: Vec<T>,
}

impl<T> MealsEnvelope<T> {
    /// Consume the envelope, returning the records.
    pub fn into_meals(self) -> Vec<T> {
        self.meals
    }

    /// Consume the envelope, returning the first record if any.
    pub fn into_first(self) -> Option<T> {
        self.meals.into_iter().next()
    }
}

/// Helper to deserialize id as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize nullable strings as empty string
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize optional strings, treating null and blank as absent
pub(crate) fn deserialize_optional_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|opt| opt.filter(|s| !s.trim().is_empty()))
}

fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
