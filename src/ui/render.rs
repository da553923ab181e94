use chrono::Local;
use ratatui::Frame;

use super::{dialogs, file_grid, layout, legend, status_bar, toast};
use crate::logic::grid::build_grid;
use crate::App;

/// Main render function - orchestrates all UI rendering
///
/// Every frame is drawn from scratch out of the current snapshot. The grid's
/// action map and geometry are stored back on the app so input handlers
/// resolve clicks and row moves against exactly what is on screen.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let has_files = !app.model.files.is_empty();
    let layout_info = layout::calculate_layout(size, app.model.ui.vim_mode, has_files);

    let view = build_grid(app.model.files.snapshot(), Local::now());
    let grid = file_grid::render_file_grid(
        f,
        layout_info.grid_area,
        &view,
        app.model.ui.selected,
        app.model.ui.scroll_row,
        &app.icon_renderer,
    );
    app.action_map = grid.action_map;
    app.model.ui.grid_columns = grid.columns;
    app.visible_rows = grid.visible_rows;
    // Takes effect next frame, after a resize
    app.update_scroll();

    legend::render_legend(f, layout_info.legend_area, app.model.ui.vim_mode, has_files);

    let info = status_bar::StatusInfo {
        base_url: &app.base_url,
        file_count: app.model.files.len(),
        loaded: app.model.files.is_loaded(),
        selected_name: app.model.selected_entry().map(|entry| entry.name.as_str()),
        activity: app.model.ui.current_activity(),
        last_error: app.model.files.last_error(),
        tick: app.tick,
    };
    status_bar::render_status_bar(f, layout_info.status_area, &info);

    // Dialogs draw over the grid
    if let Some(name) = &app.model.ui.confirm_delete {
        dialogs::render_delete_confirmation(f, name);
    }

    if let Some(prompt) = &app.model.ui.upload_prompt {
        dialogs::render_upload_prompt(f, &prompt.input);
    }

    if app.model.ui.show_help {
        dialogs::render_help(f, app.model.ui.vim_mode);
    }

    // Render toast notification if active
    if let Some(toast) = &app.model.ui.toast {
        toast::render_toast(f, size, toast, &app.icon_renderer);
    }
}
