use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::{deserialize_id, deserialize_nullable_string, deserialize_optional_string};

/// Number of `strIngredientN` / `strMeasureN` slots the lookup endpoint sends.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Full detail record for one recipe.
///
/// `ingredients` and `measures` are index-aligned: `measures()[i]` is the
/// quantity for `ingredients()[i]`, possibly blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMeal")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub tags: Vec<String>,
    pub youtube_url: Option<String>,
    pub source_url: Option<String>,
    ingredients: Vec<String>,
    measures: Vec<String>,
}

impl Meal {
    /// Build a meal from ordered `(ingredient, measure)` pairs.
    pub fn new<I, S, M>(
        id: impl Into<String>,
        name: impl Into<String>,
        instructions: impl Into<String>,
        pairs: I,
    ) -> Self
    where
        I: IntoIterator<Item = (S, M)>,
        S: Into<String>,
        M: Into<String>,
    {
        let (ingredients, measures) = pairs
            .into_iter()
            .map(|(ingredient, measure)| (ingredient.into(), measure.into()))
            .unzip();

        Self {
            id: id.into(),
            name: name.into(),
            instructions: instructions.into(),
            thumbnail_url: None,
            category: None,
            area: None,
            tags: Vec::new(),
            youtube_url: None,
            source_url: None,
            ingredients,
            measures,
        }
    }

    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Measures padded to the length of [`Meal::ingredients`].
    pub fn measures(&self) -> &[String] {
        &self.measures
    }

    /// `(ingredient, measure)` rows in display order.
    pub fn ingredient_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.ingredients
            .iter()
            .zip(self.measures.iter())
            .map(|(i, m)| (i.as_str(), m.as_str()))
    }
}

/// Wire shape of a lookup entry; the numbered slots land in `slots`.
#[derive(Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal", deserialize_with = "deserialize_id")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(
        rename = "strInstructions",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    instructions: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail_url: Option<String>,
    #[serde(
        rename = "strCategory",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    category: Option<String>,
    #[serde(
        rename = "strArea",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    area: Option<String>,
    #[serde(
        rename = "strTags",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    tags: Option<String>,
    #[serde(
        rename = "strYoutube",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    youtube_url: Option<String>,
    #[serde(
        rename = "strSource",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    source_url: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        let (ingredients, measures) = collect_ingredients(&raw.slots);
        let tags = raw
            .tags
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Meal {
            id: raw.id,
            name: raw.name,
            instructions: raw.instructions,
            thumbnail_url: raw.thumbnail_url,
            category: raw.category,
            area: raw.area,
            tags,
            youtube_url: raw.youtube_url,
            source_url: raw.source_url,
            ingredients,
            measures,
        }
    }
}

fn slot_text(slots: &HashMap<String, Value>, key: &str) -> Option<String> {
    match slots.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Walk the numbered slots in order and stop at the first blank ingredient.
///
/// Accepted ingredients and their measures are kept as sent. A missing or
/// null measure is kept as `""` so the two lists stay aligned.
fn collect_ingredients(slots: &HashMap<String, Value>) -> (Vec<String>, Vec<String>) {
    let mut ingredients = Vec::new();
    let mut measures = Vec::new();

    for slot in 1..=MAX_INGREDIENT_SLOTS {
        let Some(ingredient) = slot_text(slots, &format!("strIngredient{}", slot))
            .filter(|s| !s.trim().is_empty())
        else {
            break;
        };
        let measure = slot_text(slots, &format!("strMeasure{}", slot)).unwrap_or_default();

        ingredients.push(ingredient);
        measures.push(measure);
    }

    (ingredients, measures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup_entry(ingredients: &[&str], measures: &[&str]) -> Value {
        let mut entry = json!({
            "idMeal": "52893",
            "strMeal": "Apple & Blackberry Crumble",
            "strMealThumb": "https://img/crumble.jpg",
            "strInstructions": "Heat oven to 190C.",
            "strCategory": "Dessert",
            "strArea": "British",
            "strTags": "Pudding, Fruity,",
            "strYoutube": "",
            "strSource": null,
        });
        let map = entry.as_object_mut().unwrap();
        for slot in 1..=MAX_INGREDIENT_SLOTS {
            let ingredient = ingredients.get(slot - 1).copied().unwrap_or("");
            let measure = measures.get(slot - 1).copied().unwrap_or("");
            map.insert(format!("strIngredient{}", slot), json!(ingredient));
            map.insert(format!("strMeasure{}", slot), json!(measure));
        }
        entry
    }

    #[test]
    fn test_decode_full_meal() {
        let meal: Meal =
            serde_json::from_value(lookup_entry(&["Flour", "Sugar"], &["2 cups", "1 cup"]))
                .unwrap();

        assert_eq!(meal.id, "52893");
        assert_eq!(meal.name, "Apple & Blackberry Crumble");
        assert_eq!(meal.instructions, "Heat oven to 190C.");
        assert_eq!(meal.thumbnail_url.as_deref(), Some("https://img/crumble.jpg"));
        assert_eq!(meal.category.as_deref(), Some("Dessert"));
        assert_eq!(meal.area.as_deref(), Some("British"));
        assert_eq!(meal.tags, vec!["Pudding", "Fruity"]);
        assert_eq!(meal.youtube_url, None);
        assert_eq!(meal.source_url, None);
        assert_eq!(meal.ingredients(), ["Flour", "Sugar"]);
        assert_eq!(meal.measures(), ["2 cups", "1 cup"]);
    }

    #[test]
    fn test_trailing_empty_pairs_are_trimmed() {
        let meal: Meal = serde_json::from_value(lookup_entry(
            &["Flour", "Sugar", "", ""],
            &["2 cups", "1 cup", "", ""],
        ))
        .unwrap();

        assert_eq!(meal.ingredients().len(), 2);
        assert_eq!(meal.measures().len(), 2);
    }

    #[test]
    fn test_empty_ingredient_ends_the_list_regardless_of_measure() {
        let meal: Meal = serde_json::from_value(lookup_entry(
            &["Flour", "", "Eggs"],
            &["2 cups", "a pinch", "3"],
        ))
        .unwrap();

        assert_eq!(meal.ingredients(), ["Flour"]);
        assert_eq!(meal.measures(), ["2 cups"]);
    }

    #[test]
    fn test_blank_and_null_measures_are_padded() {
        let mut entry = lookup_entry(&["Butter", "Salt", "Vanilla"], &["100g", " "]);
        entry["strMeasure3"] = Value::Null;

        let meal: Meal = serde_json::from_value(entry).unwrap();

        assert_eq!(meal.ingredients(), ["Butter", "Salt", "Vanilla"]);
        assert_eq!(meal.measures(), ["100g", " ", ""]);
    }

    #[test]
    fn test_ingredients_and_measures_are_kept_verbatim() {
        let mut entry = lookup_entry(&[" Flour ", "Sugar\t"], &[" 2 cups ", "1 cup\n"]);
        entry["strMealThumb"] = json!("");

        let meal: Meal = serde_json::from_value(entry).unwrap();

        assert_eq!(meal.ingredients(), [" Flour ", "Sugar\t"]);
        assert_eq!(meal.measures(), [" 2 cups ", "1 cup\n"]);
        assert_eq!(meal.thumbnail_url.as_deref(), Some(""));
    }

    #[test]
    fn test_null_and_whitespace_ingredients_end_the_list() {
        let mut entry = lookup_entry(&["Milk", "Cocoa"], &["1 l", "2 tbsp"]);
        entry["strIngredient2"] = Value::Null;
        let meal: Meal = serde_json::from_value(entry).unwrap();
        assert_eq!(meal.ingredients(), ["Milk"]);

        let entry = lookup_entry(&["Milk", "   ", "Cocoa"], &["1 l", "", "2 tbsp"]);
        let meal: Meal = serde_json::from_value(entry).unwrap();
        assert_eq!(meal.ingredients(), ["Milk"]);
    }

    #[test]
    fn test_all_twenty_slots_are_read() {
        let names: Vec<String> = (1..=MAX_INGREDIENT_SLOTS).map(|i| format!("i{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let meal: Meal = serde_json::from_value(lookup_entry(&refs, &[])).unwrap();

        assert_eq!(meal.ingredients().len(), MAX_INGREDIENT_SLOTS);
        assert!(meal.measures().iter().all(String::is_empty));
    }

    #[test]
    fn test_minimal_entry_without_slots() {
        let meal: Meal =
            serde_json::from_value(json!({"idMeal": "1", "strMeal": "Plain"})).unwrap();

        assert_eq!(meal.instructions, "");
        assert!(meal.ingredients().is_empty());
        assert!(meal.measures().is_empty());
        assert!(meal.tags.is_empty());
    }

    #[test]
    fn test_ingredient_pairs_and_constructor() {
        let meal = Meal::new("9", "Fudge", "Stir.", [("Sugar", "200g"), ("Cream", "")])
            .with_thumbnail_url("https://img/fudge.jpg");

        let pairs: Vec<_> = meal.ingredient_pairs().collect();
        assert_eq!(pairs, vec![("Sugar", "200g"), ("Cream", "")]);
        assert_eq!(meal.thumbnail_url.as_deref(), Some("https://img/fudge.jpg"));
    }

    #[test]
    fn test_missing_id_is_an_error() {
        assert!(serde_json::from_value::<Meal>(json!({"strMeal": "Nameless"})).is_err());
    }
}
