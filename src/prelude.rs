//! Prelude module for convenient imports.
//!
//! ```ignore
//! use dessert_book::prelude::*;
//! ```
//!
//! This will import:
//! - The client and its trait (RecipeClient, RecipeService)
//! - Model types (Dessert, Meal)
//! - View-models and their state (DessertViewModel, MealViewModel, Published)
//! - Errors (RecipeError, RecipeResult)

// Client
pub use crate::client::{RecipeClient, RecipeService};
pub use crate::config::ClientConfig;

// Model types
pub use crate::models::{Dessert, Meal};

// View-models and state
pub use crate::state::Published;
pub use crate::view_model::{DessertViewModel, FetchHandle, MealViewModel};

// List helpers
pub use crate::browse::{filter_by_name, ScrollIndex};

// Errors
pub use crate::error::{RecipeError, RecipeResult};
