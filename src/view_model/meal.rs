use std::sync::Arc;

use super::FetchHandle;
use crate::client::{RecipeClient, RecipeService};
use crate::models::Meal;
use crate::state::Published;

/// State behind the recipe detail screen for one meal id.
pub struct MealViewModel {
    service: Arc<dyn RecipeService>,
    meal_id: String,
    meal: Published<Option<Meal>>,
}

impl MealViewModel {
    pub fn new(service: Arc<dyn RecipeService>, meal_id: impl Into<String>) -> Self {
        Self {
            service,
            meal_id: meal_id.into(),
            meal: Published::new(None),
        }
    }

    /// View-model for `meal_id` backed by the public API.
    pub fn for_meal(meal_id: impl Into<String>) -> Self {
        Self::new(Arc::new(RecipeClient::new()), meal_id)
    }

    pub fn meal_id(&self) -> &str {
        &self.meal_id
    }

    /// Published recipe. `None` until a fetch succeeds, and also after a
    /// successful fetch for an id the API does not know.
    pub fn meal(&self) -> &Published<Option<Meal>> {
        &self.meal
    }

    /// Fetch the recipe for the bound meal id.
    pub fn fetch_meal(&self) -> FetchHandle {
        self.fetch_meal_with_id(self.meal_id.clone())
    }

    /// Fetch the recipe for `id` in the background.
    ///
    /// On success the published meal is replaced by the result, including
    /// `None`. On failure the error is logged and nothing is published.
    pub fn fetch_meal_with_id(&self, id: impl Into<String>) -> FetchHandle {
        let id = id.into();
        let service = Arc::clone(&self.service);
        let meal = self.meal.clone();

        FetchHandle::spawn(async move {
            match service.fetch_recipe(&id).await {
                Ok(fetched) => {
                    match &fetched {
                        Some(m) => tracing::info!(
                            "Publishing recipe {} ({} ingredients)",
                            m.id,
                            m.ingredients().len()
                        ),
                        None => tracing::info!("No recipe for meal id {}", id),
                    }
                    meal.replace(fetched);
                }
                Err(err) => {
                    tracing::error!(
                        "[{}] Failed to fetch recipe {}: {}",
                        err.error_code(),
                        id,
                        err
                    );
                }
            }
        })
    }
}

impl std::fmt::Debug for MealViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MealViewModel")
            .field("meal_id", &self.meal_id)
            .field("loaded", &self.meal.with(Option::is_some))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::config::ClientConfig;
    use crate::traits::HttpError;

    const LOOKUP_URL: &str = "https://themealdb.com/api/json/v1/1/lookup.php?i=";

    const CRUMBLE: &str = r#"{"meals":[{
        "idMeal":"52893","strMeal":"Apple & Blackberry Crumble",
        "strInstructions":"Heat oven to 190C.","strMealThumb":"https://img/crumble.jpg",
        "strIngredient1":"Flour","strMeasure1":"2 cups",
        "strIngredient2":"Sugar","strMeasure2":"1 cup",
        "strIngredient3":"","strMeasure3":"",
        "strIngredient4":"","strMeasure4":""
    }]}"#;

    fn view_model(id: &str) -> (MealViewModel, MockHttpClient) {
        let http = MockHttpClient::new();
        let client = RecipeClient::with_http(http.clone(), ClientConfig::default());
        (MealViewModel::new(Arc::new(client), id), http)
    }

    #[tokio::test]
    async fn test_fetch_meal_publishes_recipe() {
        let (vm, http) = view_model("52893");
        http.set_response(&format!("{}52893", LOOKUP_URL), MockResponse::json(CRUMBLE));

        assert!(vm.meal().snapshot().is_none());
        assert!(vm.fetch_meal().join().await);

        let meal = vm.meal().snapshot().unwrap();
        assert_eq!(meal.name, "Apple & Blackberry Crumble");
        assert_eq!(meal.ingredients(), ["Flour", "Sugar"]);
        assert_eq!(meal.measures(), ["2 cups", "1 cup"]);
        assert_eq!(http.get_requests()[0].url, format!("{}52893", LOOKUP_URL));
    }

    #[tokio::test]
    async fn test_unknown_id_publishes_none() {
        let (vm, http) = view_model("0");
        http.set_response(&format!("{}0", LOOKUP_URL), MockResponse::json(r#"{"meals":[]}"#));

        vm.fetch_meal().join().await;

        assert!(vm.meal().snapshot().is_none());
        assert_eq!(vm.meal().version(), 1);
    }

    #[tokio::test]
    async fn test_none_result_replaces_previous_meal() {
        let (vm, http) = view_model("52893");
        http.set_response(&format!("{}52893", LOOKUP_URL), MockResponse::json(CRUMBLE));
        http.set_response(&format!("{}404", LOOKUP_URL), MockResponse::json(r#"{"meals":null}"#));

        vm.fetch_meal().join().await;
        assert!(vm.meal().snapshot().is_some());

        vm.fetch_meal_with_id("404").join().await;
        assert!(vm.meal().snapshot().is_none());
    }

    #[tokio::test]
    async fn test_failure_leaves_meal_unchanged() {
        let (vm, http) = view_model("52893");
        http.push_response(&format!("{}52893", LOOKUP_URL), MockResponse::json(CRUMBLE));
        http.push_response(
            &format!("{}52893", LOOKUP_URL),
            MockResponse::Error(HttpError::ConnectionFailed("offline".to_string())),
        );
        http.push_response(&format!("{}52893", LOOKUP_URL), MockResponse::json("[]"));

        vm.fetch_meal().join().await;
        vm.fetch_meal().join().await;
        vm.fetch_meal().join().await;

        assert_eq!(vm.meal().snapshot().unwrap().id, "52893");
        assert_eq!(vm.meal().version(), 1);
    }

    #[tokio::test]
    async fn test_first_failure_stays_none() {
        let (vm, http) = view_model("52893");
        http.set_default_response(MockResponse::json("<html>502 Bad Gateway</html>"));

        vm.fetch_meal().join().await;

        assert!(vm.meal().snapshot().is_none());
        assert_eq!(vm.meal().version(), 0);
    }

    #[test]
    fn test_meal_id_is_bound() {
        let (vm, _http) = view_model("53049");
        assert_eq!(vm.meal_id(), "53049");
    }
}
