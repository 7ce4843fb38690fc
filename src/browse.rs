//! List-screen helpers: search filtering and the alphabetical scroll index.

use std::collections::BTreeMap;

use crate::models::Dessert;

/// Desserts whose name contains `query`, ignoring case.
///
/// An empty query matches everything. Order is preserved.
pub fn filter_by_name<'a>(desserts: &'a [Dessert], query: &str) -> Vec<&'a Dessert> {
    if query.is_empty() {
        return desserts.iter().collect();
    }

    let query_lower = query.to_lowercase();
    desserts
        .iter()
        .filter(|d| d.name.to_lowercase().contains(&query_lower))
        .collect()
}

/// Index letters for a list, each pointing at the first dessert under it.
///
/// Letters are the uppercased first character of each name, sorted. A
/// screen scrolls to [`ScrollIndex::target_for`] when a letter is tapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollIndex {
    targets: BTreeMap<String, String>,
}

impl ScrollIndex {
    pub fn build(desserts: &[Dessert]) -> Self {
        let mut targets = BTreeMap::new();
        for dessert in desserts {
            let Some(first) = dessert.name.chars().next() else {
                continue;
            };
            let letter: String = first.to_uppercase().collect();
            targets.entry(letter).or_insert_with(|| dessert.id.clone());
        }
        Self { targets }
    }

    /// Sorted index letters.
    pub fn letters(&self) -> impl Iterator<Item = &str> + '_ {
        self.targets.keys().map(String::as_str)
    }

    /// Id of the first dessert filed under `letter`.
    pub fn target_for(&self, letter: &str) -> Option<&str> {
        self.targets.get(letter).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
