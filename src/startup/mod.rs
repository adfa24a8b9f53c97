//! Startup: configuration, logging, and the preview server.
//!
//! - [`config`] - [`AppConfig`] from the environment and CLI flags
//! - [`logging`] - file-backed tracing subscriber
//! - [`preview`] - optional preview server
//!
//! ```ignore
//! use specdeck::startup::{init_logging, start_preview_system, AppConfig};
//!
//! init_logging()?;
//! let config = AppConfig::from_env()?.apply_cli(&options);
//! let preview = start_preview_system(&config, store.subscribe()).await;
//! ```

pub mod config;
pub mod logging;
pub mod preview;

pub use config::{AppConfig, BUILD_API_KEY};
pub use logging::{init_logging, init_logging_in};
pub use preview::start_preview_system;
