use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInfo {
    /// File grid area
    pub grid_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, vim_mode: bool, has_files: bool) -> LayoutInfo {
    let legend_height =
        super::legend::calculate_legend_height(terminal_size.width, vim_mode, has_files);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                // File grid
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        grid_area: main_chunks[0],
        legend_area: main_chunks[1],
        status_area: main_chunks[2],
    }
}
