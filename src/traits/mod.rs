//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP client operations used by the assistant

pub mod http;

pub use http::{json_bearer_headers, Headers, HttpClient, HttpError, Response};
