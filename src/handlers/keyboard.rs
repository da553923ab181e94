//! Keyboard Input Handler
//!
//! Handles keyboard input: dialogs first, then grid navigation and the
//! card actions of the selected file.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::layout::GridMove;
use crate::model::{BoundAction, UploadPromptState};
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits, even with a dialog open
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    // Handle delete confirmation prompt
    if app.model.ui.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            // Ignore other keys while prompt is showing
            _ => {}
        }
        return;
    }

    // Upload prompt takes all text input
    if let Some(prompt) = app.model.ui.upload_prompt.as_mut() {
        match key.code {
            KeyCode::Enter => {
                app.submit_upload_prompt();
            }
            KeyCode::Esc => app.model.ui.upload_prompt = None,
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) => prompt.input.push(c),
            _ => {}
        }
        return;
    }

    if app.model.ui.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.model.ui.show_help = false;
        }
        return;
    }

    let vim_mode = app.model.ui.vim_mode;
    if key.code != KeyCode::Char('g') {
        app.last_key_was_g = false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.model.ui.should_quit = true,
        KeyCode::Char('?') => app.model.ui.show_help = true,
        KeyCode::Char('u') => app.model.ui.upload_prompt = Some(UploadPromptState::default()),
        KeyCode::Char('r') => {
            app.request_reload();
        }

        KeyCode::Left => app.move_selection(GridMove::Left),
        KeyCode::Right => app.move_selection(GridMove::Right),
        KeyCode::Up => app.move_selection(GridMove::Up),
        KeyCode::Down => app.move_selection(GridMove::Down),
        KeyCode::Home => app.move_selection(GridMove::First),
        KeyCode::End => app.move_selection(GridMove::Last),

        // Vim keybindings
        KeyCode::Char('h') if vim_mode => app.move_selection(GridMove::Left),
        KeyCode::Char('j') if vim_mode => app.move_selection(GridMove::Down),
        KeyCode::Char('k') if vim_mode => app.move_selection(GridMove::Up),
        KeyCode::Char('l') if vim_mode => app.move_selection(GridMove::Right),
        KeyCode::Char('g') if vim_mode => {
            if app.last_key_was_g {
                // gg - jump to first
                app.move_selection(GridMove::First);
                app.last_key_was_g = false;
            } else {
                app.last_key_was_g = true;
            }
        }
        KeyCode::Char('G') if vim_mode => app.move_selection(GridMove::Last),

        KeyCode::Enter | KeyCode::Char('d') => {
            if let Some(entry) = app.model.selected_entry() {
                let action = BoundAction::download(entry.name.clone());
                app.dispatch_action(action);
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(entry) = app.model.selected_entry() {
                let action = BoundAction::delete(entry.name.clone());
                app.dispatch_action(action);
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FileEntry;
    use crate::config::Config;
    use crate::services::api::ApiRequest;
    use tokio::sync::mpsc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_files(names: &[&str]) -> (App, mpsc::UnboundedReceiver<ApiRequest>) {
        let (api_tx, api_rx) = mpsc::unbounded_channel();
        let (_response_tx, response_rx) = mpsc::unbounded_channel();
        let mut app = App::new(&Config::default(), api_tx, response_rx);

        let epoch = app.model.files.begin_reload();
        let entries = names
            .iter()
            .map(|name| FileEntry {
                name: name.to_string(),
                size: 1,
                modified: String::new(),
                file_type: String::new(),
            })
            .collect();
        app.model.files.apply_listing(epoch, entries);
        app.clamp_selection();
        (app, api_rx)
    }

    #[test]
    fn test_delete_key_opens_confirmation_for_selected() {
        let (mut app, mut requests) = app_with_files(&["a.txt", "b.txt"]);
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Char('x')));

        assert_eq!(app.model.ui.confirm_delete.as_deref(), Some("b.txt"));
        assert!(requests.try_recv().is_err());
    }

    #[test]
    fn test_confirmation_swallows_other_keys() {
        let (mut app, mut requests) = app_with_files(&["a.txt"]);
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Char('q')));

        assert!(!app.model.ui.should_quit);
        assert!(app.model.ui.confirm_delete.is_some());

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.model.ui.confirm_delete.is_none());
        assert!(requests.try_recv().is_err());
    }

    #[test]
    fn test_confirm_with_y_sends_delete() {
        let (mut app, mut requests) = app_with_files(&["a.txt"]);
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Char('Y')));

        assert!(matches!(
            requests.try_recv(),
            Ok(ApiRequest::DeleteFile { name }) if name == "a.txt"
        ));
    }

    #[test]
    fn test_upload_prompt_collects_text() {
        let (mut app, _requests) = app_with_files(&[]);
        handle_key(&mut app, press(KeyCode::Char('u')));
        for c in "ab".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Backspace));
        // 'q' is text inside the prompt, not quit
        handle_key(&mut app, press(KeyCode::Char('q')));

        assert_eq!(app.model.ui.upload_prompt.as_ref().unwrap().input, "aq");
        assert!(!app.model.ui.should_quit);

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.model.ui.upload_prompt.is_none());
    }

    #[test]
    fn test_vim_gg_jumps_to_first() {
        let (mut app, _requests) = app_with_files(&["a", "b", "c"]);
        app.model.ui.vim_mode = true;
        handle_key(&mut app, press(KeyCode::Char('G')));
        assert_eq!(app.model.ui.selected, Some(2));

        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.model.ui.selected, Some(2));
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.model.ui.selected, Some(0));
    }

    #[test]
    fn test_hjkl_ignored_without_vim_mode() {
        let (mut app, _requests) = app_with_files(&["a", "b"]);
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.model.ui.selected, Some(0));
    }

    #[test]
    fn test_refresh_key_requests_listing() {
        let (mut app, mut requests) = app_with_files(&[]);
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert!(matches!(requests.try_recv(), Ok(ApiRequest::ListFiles { epoch: 2 })));
    }
}
