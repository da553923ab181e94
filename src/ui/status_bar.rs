use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::file::sanitize_display_name;
use crate::logic::ui::spinner_frame;

/// Everything the status bar shows
#[derive(Debug, Clone, Default)]
pub struct StatusInfo<'a> {
    pub base_url: &'a str,
    pub file_count: usize,
    pub loaded: bool,
    pub selected_name: Option<&'a str>,
    pub activity: Option<&'a str>,
    pub last_error: Option<&'a str>,
    pub tick: u64,
}

/// Build the status line parts as `(label, value)` pairs
fn build_status_parts(info: &StatusInfo) -> Vec<(String, String)> {
    let mut parts = vec![("Server:".to_string(), format!(" {}", info.base_url))];

    let files = if info.loaded {
        format!(" {}", info.file_count)
    } else {
        " -".to_string()
    };
    parts.push(("Files:".to_string(), files));

    if let Some(name) = info.selected_name {
        parts.push(("Selected:".to_string(), format!(" {}", sanitize_display_name(name))));
    }

    parts
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let mut spans = vec![];
    for (idx, (label, value)) in build_status_parts(info).into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(value));
    }

    // Activity indicator: visible while anything is in flight
    if let Some(activity) = info.activity {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} {}", spinner_frame(info.tick), activity),
            Style::default().fg(Color::Cyan),
        ));
    }

    if let Some(error) = info.last_error {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            sanitize_display_name(error),
            Style::default().fg(Color::Red),
        ));
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parts_before_first_listing() {
        let info = StatusInfo {
            base_url: "http://localhost:5000",
            ..Default::default()
        };
        let parts = build_status_parts(&info);
        assert_eq!(parts[0].1, " http://localhost:5000");
        assert_eq!(parts[1], ("Files:".to_string(), " -".to_string()));
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn test_status_parts_with_selection() {
        let info = StatusInfo {
            base_url: "http://h",
            file_count: 3,
            loaded: true,
            selected_name: Some("bad\u{7}name.txt"),
            ..Default::default()
        };
        let parts = build_status_parts(&info);
        assert_eq!(parts[1].1, " 3");
        assert_eq!(parts[2].1, " bad\u{FFFD}name.txt");
    }
}
