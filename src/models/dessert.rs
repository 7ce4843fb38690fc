use serde::Deserialize;

use super::deserialize_id;

/// Summary record for one recipe in the dessert list.
///
/// Decoded from an entry of `filter.php?c=Dessert`:
/// `{ "strMeal": ..., "strMealThumb": ..., "idMeal": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Dessert {
    /// Upstream meal id, also the list-stability key
    #[serde(rename = "idMeal", deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name, used for search and ordering
    #[serde(rename = "strMeal")]
    pub name: String,
    /// Thumbnail image URL, as sent
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail_url: Option<String>,
}

impl Dessert {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail_url: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail_url,
        }
    }

    /// True when both the id and the name are non-empty.
    pub fn is_listable(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty()
    }
}
