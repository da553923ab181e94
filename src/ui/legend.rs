use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, has_files: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("hjkl", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("gg/G", Style::default().fg(Color::Yellow)),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("←↑↓→", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
        ]);
    }

    // Card actions only make sense when something is listed
    if has_files {
        hotkey_spans.extend(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Download  "),
            Span::styled("x", Style::default().fg(Color::Yellow)),
            Span::raw(":Delete  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("u", Style::default().fg(Color::Yellow)),
        Span::raw(":Upload  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(":Refresh  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(":Help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(vim_mode: bool, has_files: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, has_files));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, has_files: bool) {
    f.render_widget(build_legend_paragraph(vim_mode, has_files), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool, has_files: bool) -> u16 {
    // Count lines without the block: line_count() does not account for borders
    let paragraph_for_counting =
        Paragraph::new(vec![Line::from(build_hotkey_spans(vim_mode, has_files))])
            .wrap(Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}
