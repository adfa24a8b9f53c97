//! Test doubles for the trait abstractions.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
