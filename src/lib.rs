//! Dessert Book - fetch-and-present core of a dessert recipe browser.
//!
//! The crate fetches the dessert list and single recipes from TheMealDB,
//! decodes them into [`models`], and exposes per-screen [`view_model`]s whose
//! state any rendering layer can observe through [`state::Published`].

pub mod adapters;
pub mod browse;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod prelude;
pub mod state;
pub mod traits;
pub mod view_model;
