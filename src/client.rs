//! Recipe API client.
//!
//! Translates the two logical operations of the app into GET requests
//! against TheMealDB and decodes the `{ "meals": [...] }` envelopes.

use async_trait::async_trait;

use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{RecipeError, RecipeResult};
use crate::models::{Dessert, Meal, MealsEnvelope};
use crate::traits::{Headers, HttpClient, Response};

/// The operations a view-model needs from the recipe backend.
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Fetch every recipe in the Dessert category.
    ///
    /// An empty list is a valid result.
    async fn fetch_dessert_list(&self) -> RecipeResult<Vec<Dessert>>;

    /// Fetch the full recipe for `meal_id`.
    ///
    /// Returns `Ok(None)` when the API knows no such meal.
    async fn fetch_recipe(&self, meal_id: &str) -> RecipeResult<Option<Meal>>;
}

/// [`RecipeService`] backed by an [`HttpClient`].
///
/// # Example
///
/// ```ignore
/// use dessert_book::client::{RecipeClient, RecipeService};
///
/// let client = RecipeClient::from_env()?;
/// let desserts = client.fetch_dessert_list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct RecipeClient<C = ReqwestHttpClient> {
    http: C,
    config: ClientConfig,
}

impl RecipeClient<ReqwestHttpClient> {
    /// Client for the public API with default settings.
    pub fn new() -> Self {
        Self::with_http(ReqwestHttpClient::new(), ClientConfig::default())
    }

    /// Client honouring `config`, including its timeout and user agent.
    pub fn from_config(config: ClientConfig) -> RecipeResult<Self> {
        let http = ReqwestHttpClient::from_config(&config)?;
        Ok(Self::with_http(http, config))
    }

    /// Client configured from the environment.
    pub fn from_env() -> RecipeResult<Self> {
        Self::from_config(ClientConfig::from_env())
    }
}

impl Default for RecipeClient<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> RecipeClient<C> {
    /// Client over an arbitrary transport.
    pub fn with_http(http: C, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// GET `url` and hand back the raw response.
    ///
    /// Status codes are deliberately not interpreted: whatever body comes
    /// back is decoded, and only a failed decode is an error.
    async fn get(&self, url: String) -> RecipeResult<Response> {
        let url = validate_url(url)?;

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.http.get(&url, &headers).await?;
        if !response.is_success() {
            tracing::warn!(
                "GET {} returned HTTP {}; decoding body anyway",
                url,
                response.status
            );
        }
        Ok(response)
    }
}

#[async_trait]
impl<C: HttpClient> RecipeService for RecipeClient<C> {
    async fn fetch_dessert_list(&self) -> RecipeResult<Vec<Dessert>> {
        let response = self.get(self.config.dessert_list_url()).await?;
        let envelope: MealsEnvelope<Dessert> = response.json()?;
        let desserts = envelope.into_meals();
        tracing::debug!("Decoded {} desserts", desserts.len());
        Ok(desserts)
    }

    async fn fetch_recipe(&self, meal_id: &str) -> RecipeResult<Option<Meal>> {
        let response = self.get(self.config.recipe_url(meal_id)).await?;
        let envelope: MealsEnvelope<Meal> = response.json()?;
        let meal = envelope.into_first();
        if meal.is_none() {
            tracing::debug!("No recipe found for meal id {:?}", meal_id);
        }
        Ok(meal)
    }
}

/// Parse `url` to make sure it is absolute and well formed.
fn validate_url(url: String) -> RecipeResult<String> {
    match reqwest::Url::parse(&url) {
        Ok(parsed) if parsed.has_host() => Ok(url),
        Ok(_) => Err(RecipeError::InvalidUrl(format!("{} has no host", url))),
        Err(e) => Err(RecipeError::InvalidUrl(format!("{}: {}", url, e))),
    }
}
