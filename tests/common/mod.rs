//! Common test utilities for integration tests.
//!
//! Fixtures mirror the shapes TheMealDB returns, and [`mount_api`] wires a
//! wiremock server up as the API root.

#![allow(dead_code)]

use dessert_book::client::RecipeClient;
use dessert_book::config::ClientConfig;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path prefix the mock server serves the API under.
pub const API_PREFIX: &str = "/api/json/v1/1";

/// Dessert list with one nameless entry, out of order.
pub fn dessert_list_fixture() -> Value {
    json!({
        "meals": [
            {"strMeal": "Apple Pie", "strMealThumb": "u1", "idMeal": "1"},
            {"strMeal": "", "strMealThumb": "u2", "idMeal": "2"},
            {"strMeal": "Banana Split", "strMealThumb": "u3", "idMeal": "3"}
        ]
    })
}

/// One lookup entry with all twenty slots populated the way the API does.
pub fn lookup_fixture(id: &str, pairs: &[(&str, &str)]) -> Value {
    let mut meal = json!({
        "idMeal": id,
        "strMeal": "Chocolate Gateau",
        "strDrinkAlternate": null,
        "strCategory": "Dessert",
        "strArea": "French",
        "strInstructions": "Preheat the oven to 180C.",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/tqtywx1468317395.jpg",
        "strTags": null,
        "strYoutube": "https://www.youtube.com/watch?v=dsJtgmAhFF4",
        "strSource": "",
        "dateModified": null
    });
    let map = meal.as_object_mut().unwrap();
    for slot in 1..=20 {
        let (ingredient, measure) = pairs.get(slot - 1).copied().unwrap_or(("", ""));
        map.insert(format!("strIngredient{}", slot), json!(ingredient));
        map.insert(format!("strMeasure{}", slot), json!(measure));
    }
    json!({ "meals": [meal] })
}

/// Start a mock server and a client pointed at it.
pub async fn mount_api() -> (MockServer, RecipeClient) {
    let server = MockServer::start().await;
    let config = ClientConfig::default()
        .with_base_url(format!("{}{}", server.uri(), API_PREFIX))
        .with_timeout(Duration::from_secs(2));
    let client = RecipeClient::from_config(config).expect("client");
    (server, client)
}

/// Serve `body` for the dessert list endpoint.
pub async fn mock_dessert_list(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("{}/filter.php", API_PREFIX)))
        .and(query_param("c", "Dessert"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Serve `body` for the lookup endpoint with `id`.
pub async fn mock_lookup(server: &MockServer, id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("{}/lookup.php", API_PREFIX)))
        .and(query_param("i", id))
        .respond_with(response)
        .mount(server)
        .await;
}
