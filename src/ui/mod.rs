//! UI rendering for specdeck
//!
//! One frame is a header, the editor pane on the left, the assistant and
//! preview stacked on the right, and a status bar. Narrow terminals move the
//! assistant and preview below the editor (see [`LayoutContext`]).

mod assistant;
mod editor;
mod header;
mod helpers;
mod layout;
mod outline;
mod preview;
mod status;
mod theme;

pub use layout::{breakpoints, LayoutContext, Regions};
pub use outline::outline_lines;
pub use status::key_hints;
pub use theme::{method_color, COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};

use ratatui::Frame;

use crate::app::App;

/// Render the complete UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let ctx = LayoutContext::from_rect(frame.area());
    let regions = ctx.regions(frame.area());

    header::render_header(frame, regions.header, app);
    editor::render_editor(frame, regions.editor, app);
    assistant::render_assistant(frame, regions.assistant, app);
    preview::render_preview(frame, regions.preview, app);
    status::render_status(frame, regions.status, app);
}
