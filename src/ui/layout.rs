//! Responsive layout system
//!
//! `LayoutContext` wraps the terminal dimensions and decides how the three
//! panes share the screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub editor: Rect,
    pub assistant: Rect,
    pub preview: Rect,
    pub status: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Stack the panes vertically instead of side-by-side (< 80 columns).
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Smaller header on short terminals.
    pub fn header_height(&self) -> u16 {
        if self.height < breakpoints::SM_HEIGHT {
            1
        } else {
            3
        }
    }

    /// Editor share of the width in percent for the side-by-side layout.
    pub fn editor_percent(&self) -> u16 {
        if self.width < breakpoints::MD_WIDTH {
            50
        } else {
            55
        }
    }

    /// Split `area` into the header, the three panes and the status bar.
    pub fn regions(&self, area: Rect) -> Regions {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.header_height()),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let (editor, side) = if self.should_stack_panels() {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[1]);
            (split[0], split[1])
        } else {
            let percent = self.editor_percent();
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(percent),
                    Constraint::Percentage(100 - percent),
                ])
                .split(rows[1]);
            (split[0], split[1])
        };

        let side_split = Layout::default()
            .direction(if self.should_stack_panels() {
                Direction::Horizontal
            } else {
                Direction::Vertical
            })
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(side);

        Regions {
            header: rows[0],
            editor,
            assistant: side_split[0],
            preview: side_split[1],
            status: rows[2],
        }
    }
}
