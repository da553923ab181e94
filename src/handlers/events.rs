//! Terminal Event Handler
//!
//! Routes crossterm events: keys to the keyboard handler, clicks through the
//! action map of the last frame, and pasted text (how terminals deliver
//! dropped files) to the upload flow.

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use super::keyboard::handle_key;
use crate::logic::layout::GridMove;
use crate::App;

pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => handle_paste(app, &text),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // Dialogs are modal for the mouse too
    if app.model.has_modal() {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = app.action_map.card_at(mouse.column, mouse.row) {
                app.select_card(index);
            }
            if let Some(action) = app.action_map.action_at(mouse.column, mouse.row).cloned() {
                tracing::debug!(?action, "button clicked");
                app.dispatch_action(action);
            }
        }
        MouseEventKind::ScrollDown => app.move_selection(GridMove::Down),
        MouseEventKind::ScrollUp => app.move_selection(GridMove::Up),
        _ => {}
    }
}

/// Pasted text: prompt input while the picker is open, dropped files otherwise
pub fn handle_paste(app: &mut App, text: &str) {
    if let Some(prompt) = app.model.ui.upload_prompt.as_mut() {
        prompt.input.push_str(&text.replace(['\r', '\n'], " "));
        return;
    }
    if app.model.has_modal() {
        return;
    }
    app.handle_drop(text);
}
