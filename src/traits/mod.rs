//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET transport used by the recipe client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
