//! Integration tests for rendering
//!
//! Renders the whole screen into ratatui's `TestBackend` and checks what a
//! user would see and what clicks would do.

mod common;

use common::{detached_app, entry};
use filedeck::api::FileEntry;
use filedeck::logic::errors::TransferError;
use filedeck::handlers::{handle_api_response, handle_event};
use filedeck::model::{BoundAction, NotificationKind};
use filedeck::services::api::{ApiRequest, ApiResponse};
use filedeck::{ui, App};
use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn load(app: &mut App, files: Vec<FileEntry>) {
    let epoch = app.request_reload();
    handle_api_response(app, ApiResponse::FileList { epoch, files: Ok(files) });
}

fn draw(app: &mut App) -> Buffer {
    draw_sized(app, 80, 30)
}

fn draw_sized(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

/// Test: Rendering the same snapshot twice produces the same screen
#[test]
fn test_rendering_is_idempotent() {
    let (mut app, _requests, _responses) = detached_app();
    load(&mut app, vec![entry("a.txt", 10), entry("photo.png", 2048), entry("notes.md", 0)]);

    let first = draw(&mut app);
    let first_map = app.action_map.clone();
    let second = draw(&mut app);

    assert_eq!(first, second);
    assert_eq!(first_map, app.action_map);
}

/// Test: An empty listing shows the empty state, not an empty grid
#[test]
fn test_empty_listing_shows_placeholder() {
    let (mut app, _requests, _responses) = detached_app();
    load(&mut app, Vec::new());

    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("No files yet"), "placeholder missing");
    assert!(!text.contains("[Download]"));
    assert!(app.action_map.is_empty());
}

/// Test: Cards show name, size and modified date with both buttons
#[test]
fn test_cards_show_entry_details() {
    let (mut app, _requests, _responses) = detached_app();
    load(&mut app, vec![entry("report.pdf", 1536)]);

    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("report.pdf"));
    assert!(text.contains("1.5 KB"));
    assert!(text.contains("2020-01-01"));
    assert!(text.contains("[Download]"));
    assert!(text.contains("[Delete]"));
    assert!(text.contains("Files (1)"));
}

/// Test: Buttons are bound to the literal name, including quotes
#[test]
fn test_action_map_targets_literal_name() {
    let (mut app, _requests, _responses) = detached_app();
    load(&mut app, vec![entry("a\"b.txt", 1)]);
    draw(&mut app);

    let actions: Vec<_> = app.action_map.actions().cloned().collect();
    assert_eq!(
        actions,
        vec![BoundAction::download("a\"b.txt"), BoundAction::delete("a\"b.txt")]
    );
}

/// Test: Control characters in names never reach the screen
#[test]
fn test_control_characters_are_not_drawn() {
    let (mut app, _requests, _responses) = detached_app();
    let name = "evil\u{1b}[2J.txt";
    load(&mut app, vec![entry(name, 1)]);

    let text = buffer_text(&draw(&mut app));
    assert!(!text.contains('\u{1b}'));

    let actions: Vec<_> = app.action_map.actions().cloned().collect();
    assert!(actions.contains(&BoundAction::delete(name)));
}

/// Test: Clicking a drawn Delete button opens the confirmation for that card
#[test]
fn test_click_on_rendered_button() {
    let (mut app, mut requests, _responses) = detached_app();
    load(&mut app, vec![entry("first.txt", 1), entry("second.txt", 2)]);
    let _ = requests.try_recv();

    let buffer = draw(&mut app);
    // Find both "[Delete]" buttons on screen, by cell
    let label: Vec<String> = "[Delete]".chars().map(|c| c.to_string()).collect();
    let mut hits = Vec::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width.saturating_sub(label.len() as u16) {
            let matches = label
                .iter()
                .enumerate()
                .all(|(i, s)| buffer[(x + i as u16, y)].symbol() == s.as_str());
            if matches {
                hits.push((x, y));
            }
        }
    }
    assert_eq!(hits.len(), 2, "two delete buttons drawn");
    let (x, y) = hits[1];

    handle_event(
        &mut app,
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x + 1,
            row: y,
            modifiers: KeyModifiers::NONE,
        }),
    );

    assert_eq!(app.model.ui.confirm_delete.as_deref(), Some("second.txt"));
    assert_eq!(app.model.ui.selected, Some(1));
    assert!(requests.try_recv().is_err());

    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("Confirm Delete"));
    assert!(text.contains("Continue? (y/n)"));
}

/// Test: Only the latest toast is drawn
#[test]
fn test_only_latest_toast_is_drawn() {
    let (mut app, _requests, _responses) = detached_app();
    load(&mut app, Vec::new());

    app.model.notify("first message", NotificationKind::Success);
    app.model.notify("second message", NotificationKind::Error);

    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("second message"));
    assert!(!text.contains("first message"));
}

/// Test: The activity indicator shows while a request is in flight
#[test]
fn test_activity_indicator_in_status_bar() {
    let (mut app, mut requests, _responses) = detached_app();
    app.request_reload();
    assert!(matches!(requests.try_recv(), Ok(ApiRequest::ListFiles { .. })));

    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("Loading file list"));
    assert!(text.contains("http://localhost:5000"));
}

/// Test: Tiny terminals draw without going outside the buffer
#[test]
fn test_tiny_terminal_with_toast_and_dialog() {
    let (mut app, _requests, _responses) = detached_app();
    let files = (0..20).map(|i| entry(&format!("file{}.txt", i), i)).collect();
    load(&mut app, files);
    app.request_delete("file3.txt");
    app.model.notify("Delete failed: server returned HTTP 500", NotificationKind::Error);

    for (width, height) in [(1, 1), (2, 2), (3, 3), (80, 1), (80, 2), (1, 30), (20, 30)] {
        let buffer = draw_sized(&mut app, width, height);
        assert_eq!(buffer.area.width, width);
        assert_eq!(buffer.area.height, height);
    }

    // Cards too narrow for their buttons bind no actions
    draw_sized(&mut app, 20, 30);
    assert_eq!(app.action_map.actions().count(), 0);
}

/// Test: Control characters in server error text are not drawn
#[test]
fn test_server_error_text_is_sanitized_on_screen() {
    let (mut app, _requests, _responses) = detached_app();
    let epoch = app.request_reload();
    handle_api_response(
        &mut app,
        ApiResponse::FileList {
            epoch,
            files: Err(TransferError::Application("db\u{1b}[31mdown".into())),
        },
    );

    let text = buffer_text(&draw(&mut app));
    assert!(!text.contains('\u{1b}'));
    assert!(text.contains("db\u{FFFD}[31mdown"));
}
