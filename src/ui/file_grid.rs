//! Card grid widget
//!
//! Draws a [`GridView`] and records where each card and button landed, so
//! mouse clicks can be dispatched to the action bound to that button.

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::icons::IconRenderer;
use crate::logic::grid::{CardView, GridView};
use crate::logic::layout::{grid_columns, grid_rows, CARD_HEIGHT, CARD_WIDTH};
use crate::model::BoundAction;

const DOWNLOAD_LABEL: &str = "[Download]";
const DELETE_LABEL: &str = "[Delete]";

/// Screen regions of the last drawn grid, used to dispatch clicks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionMap {
    buttons: Vec<(Rect, BoundAction)>,
    cards: Vec<(Rect, usize)>,
}

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, area: Rect, action: BoundAction) {
        self.buttons.push((area, action));
    }

    pub fn bind_card(&mut self, area: Rect, index: usize) {
        self.cards.push((area, index));
    }

    /// Action of the button at a screen position
    pub fn action_at(&self, column: u16, row: u16) -> Option<&BoundAction> {
        let position = Position::new(column, row);
        self.buttons
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, action)| action)
    }

    /// Index of the card at a screen position
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.cards
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, index)| *index)
    }

    pub fn actions(&self) -> impl Iterator<Item = &BoundAction> {
        self.buttons.iter().map(|(_, action)| action)
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

/// Result of drawing the grid
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    pub action_map: ActionMap,
    pub columns: usize,
    pub visible_rows: usize,
}

/// Truncate to a display width, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Draw the file grid (or the empty-state placeholder) into `area`
pub fn render_file_grid(
    f: &mut Frame,
    area: Rect,
    view: &GridView,
    selected: Option<usize>,
    scroll_row: usize,
    icons: &IconRenderer,
) -> GridLayout {
    let title = format!(" Files ({}) ", view.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = grid_columns(inner.width);
    let visible_rows = grid_rows(inner.height);
    let mut layout = GridLayout {
        action_map: ActionMap::new(),
        columns,
        visible_rows,
    };

    let cards = match view {
        GridView::Empty => {
            render_empty_state(f, inner);
            return layout;
        }
        GridView::Cards(cards) => cards,
    };

    let first = scroll_row * columns;
    for (offset, card) in cards.iter().enumerate().skip(first) {
        let slot = offset - first;
        let row = (slot / columns) as u16;
        let col = (slot % columns) as u16;

        let y = inner.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > inner.y + inner.height {
            break;
        }

        // Narrow terminals get one clipped column
        let card_area = Rect {
            x: inner.x + col * CARD_WIDTH,
            y,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
        }
        .intersection(inner);
        if card_area.is_empty() {
            break;
        }

        layout.action_map.bind_card(card_area, offset);
        render_card(
            f,
            card_area,
            card,
            selected == Some(offset),
            icons,
            &mut layout.action_map,
        );
    }

    layout
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No files yet",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Drop files onto this window or press u to upload",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let placeholder = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(placeholder, area);
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    card: &CardView,
    is_selected: bool,
    icons: &IconRenderer,
    action_map: &mut ActionMap,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let icon = icons.category_icon(card.category);
    let name_width = (inner.width as usize).saturating_sub(icon.content.width());
    let name_style = if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let dim = Style::default().fg(Color::Rgb(120, 120, 120));
    let lines = vec![
        Line::from(vec![
            icon,
            Span::styled(truncate_to_width(&card.display_name, name_width), name_style),
        ]),
        Line::from(Span::styled(card.size_label.clone(), dim)),
        Line::from(Span::styled(card.modified_label.clone(), dim)),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    let buttons_width = (DOWNLOAD_LABEL.len() + 1 + DELETE_LABEL.len()) as u16;
    if inner.height < 5 || inner.width < buttons_width {
        return;
    }

    let button_row = inner.y + inner.height - 1;
    let download_area = Rect {
        x: inner.x,
        y: button_row,
        width: DOWNLOAD_LABEL.len() as u16,
        height: 1,
    };
    let delete_area = Rect {
        x: inner.x + DOWNLOAD_LABEL.len() as u16 + 1,
        y: button_row,
        width: DELETE_LABEL.len() as u16,
        height: 1,
    };

    f.render_widget(
        Paragraph::new(Span::styled(DOWNLOAD_LABEL, Style::default().fg(Color::Green))),
        download_area,
    );
    f.render_widget(
        Paragraph::new(Span::styled(DELETE_LABEL, Style::default().fg(Color::Red))),
        delete_area,
    );

    action_map.bind(download_area, card.download.clone());
    action_map.bind(delete_area, card.delete.clone());
}
