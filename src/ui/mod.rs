// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and Nerd Fonts) with themes
// - layout: Calculates screen layout (grid, legend, status bar)
// - render: Main orchestration function that coordinates all rendering
// - file_grid: Renders the card grid and records the action map
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with activity indicator
// - dialogs: Renders delete confirmation, upload prompt and help
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod file_grid;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
