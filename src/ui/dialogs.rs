use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::logic::file::sanitize_display_name;

/// Centered rectangle clamped to the frame
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, file_name: &str) {
    let prompt_text = format!(
        "Delete this file from the server?\n\n\
        File: {}\n\n\
        WARNING: This action cannot be undone!\n\n\
        Continue? (y/n)",
        sanitize_display_name(file_name)
    );

    let prompt_area = centered(f.area(), 50, 11);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the upload picker: a path input line
pub fn render_upload_prompt(f: &mut Frame, input: &str) {
    let prompt_area = centered(f.area(), 70, 7);

    let lines = vec![
        Line::from("Paths to upload (separate with spaces, quote names with spaces):"),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(input),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: upload   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Upload Files")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the keyboard help overlay
pub fn render_help(f: &mut Frame, vim_mode: bool) {
    let key = |k: &'static str| Span::styled(format!("{:<12}", k), Style::default().fg(Color::Yellow));
    let nav = if vim_mode { "hjkl/arrows" } else { "arrows" };

    let lines = vec![
        Line::from(vec![key(nav), Span::raw("Move selection")]),
        Line::from(vec![key("Home/End"), Span::raw("First / last file")]),
        Line::from(vec![key("Enter / d"), Span::raw("Download selected file")]),
        Line::from(vec![key("x / Del"), Span::raw("Delete selected file")]),
        Line::from(vec![key("u"), Span::raw("Upload files by path")]),
        Line::from(vec![key("paste/drop"), Span::raw("Upload dropped files")]),
        Line::from(vec![key("r"), Span::raw("Refresh file list")]),
        Line::from(vec![key("click"), Span::raw("Select card or press its button")]),
        Line::from(vec![key("q"), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled("Esc or ? to close", Style::default().fg(Color::DarkGray))),
    ];

    let help_area = centered(f.area(), 52, lines.len() as u16 + 2);

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, help_area);
    f.render_widget(help, help_area);
}
