//! Color theme constants for the specdeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused pane
pub const COLOR_BORDER_FOCUSED: Color = Color::Gray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Active/selected elements - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Link-like text (URLs)
pub const COLOR_LINK: Color = Color::Rgb(37, 99, 235); // #2563eb

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_ERROR: Color = Color::Red;

/// Warning notices (RapiDoc placeholder)
pub const COLOR_WARNING: Color = Color::Rgb(180, 83, 9); // amber #b45309

// ============================================================================
// HTTP Method Colors
// ============================================================================

pub const COLOR_METHOD_GET: Color = Color::Rgb(4, 181, 117);
pub const COLOR_METHOD_POST: Color = Color::Rgb(0, 122, 204);
pub const COLOR_METHOD_PUT: Color = Color::Rgb(217, 119, 6);
pub const COLOR_METHOD_DELETE: Color = Color::Red;
pub const COLOR_METHOD_OTHER: Color = Color::Gray;

/// Color for an HTTP method badge.
pub fn method_color(method: &str) -> Color {
    match method {
        "get" => COLOR_METHOD_GET,
        "post" => COLOR_METHOD_POST,
        "put" | "patch" => COLOR_METHOD_PUT,
        "delete" => COLOR_METHOD_DELETE,
        _ => COLOR_METHOD_OTHER,
    }
}
