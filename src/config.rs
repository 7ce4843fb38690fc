//! Client configuration.
//!
//! The endpoints are fixed, but the base URL can be pointed elsewhere
//! (a local mock server, a mirror) through the builder or the environment.

use std::time::Duration;

/// Base URL of TheMealDB public v1 API (free test key `1`).
pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

/// Environment variable overriding [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "DESSERT_BOOK_API_URL";

/// Environment variable overriding [`ClientConfig::timeout`], in seconds.
pub const TIMEOUT_ENV: &str = "DESSERT_BOOK_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`RecipeClient`](crate::client::RecipeClient).
///
/// # Example
///
/// ```
/// use dessert_book::config::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://localhost:8080/api")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url, "http://localhost:8080/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Whole-request timeout applied by the reqwest adapter
    pub timeout: Duration,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("dessert-book/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root. A trailing slash is stripped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a config from the environment, falling back to defaults.
    ///
    /// Unparseable timeout values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config = config.with_base_url(url.trim());
            }
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(Duration::from_secs(secs)),
                _ => tracing::warn!("Ignoring invalid {}={:?}", TIMEOUT_ENV, raw),
            }
        }

        config
    }

    /// URL of the dessert category listing.
    pub fn dessert_list_url(&self) -> String {
        format!("{}/filter.php?c=Dessert", self.base_url)
    }

    /// URL of the single recipe lookup. The id is appended verbatim.
    pub fn recipe_url(&self, meal_id: &str) -> String {
        format!("{}/lookup.php?i={}", self.base_url, meal_id)
    }
}
