//! Documentation preview.
//!
//! Renderers run in the browser. The terminal side selects a [`Viewer`] and
//! serves the current snapshot to it over a local server.

pub mod html;
pub mod server;
pub mod viewer;

pub use html::{render_page, RAPIDOC_UNAVAILABLE};
pub use server::{router, start_preview_server, PreviewServer, PreviewState};
pub use viewer::Viewer;
