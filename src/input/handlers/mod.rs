//! Command handlers for executing commands.
//!
//! This module contains handler functions organized by category:
//! - [`navigation`] - Focus, tabs, format, list selection and preview
//! - [`editing`] - Text input and editing in whichever buffer owns the keys
//! - [`assistant`] - Prompt submission, quick prompts and API key entry
//! - [`visual`] - In-place field edits and server list changes

pub mod assistant;
pub mod editing;
pub mod navigation;
pub mod visual;

pub use assistant::*;
pub use editing::*;
pub use navigation::*;
pub use visual::*;
