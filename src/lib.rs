//! specdeck - a terminal editor for OpenAPI specifications with an
//! LLM assistant and a browser documentation preview.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod assistant;
pub mod cli;
pub mod error;
pub mod input;
pub mod preview;
pub mod spec;
pub mod startup;
pub mod traits;
pub mod ui;
pub mod widgets;
