//! Card grid view building
//!
//! Turns a snapshot into the data the grid widget draws. Each card carries
//! its download/delete actions already bound to the literal entry name, so
//! the widget never has to look names up again.

use chrono::{DateTime, Local};

use crate::api::FileEntry;
use crate::logic::file::{category_for_name, sanitize_display_name, FileCategory};
use crate::logic::formatting::{format_file_size, format_modified};
use crate::model::BoundAction;

/// Everything one card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub category: FileCategory,
    /// Name with control characters replaced, for display only
    pub display_name: String,
    pub size_label: String,
    pub modified_label: String,
    pub download: BoundAction,
    pub delete: BoundAction,
}

/// What the grid area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    /// No files: draw the empty-state placeholder instead of a grid
    Empty,
    /// One card per entry, in snapshot order
    Cards(Vec<CardView>),
}

impl GridView {
    pub fn len(&self) -> usize {
        match self {
            GridView::Empty => 0,
            GridView::Cards(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn card(&self, index: usize) -> Option<&CardView> {
        match self {
            GridView::Empty => None,
            GridView::Cards(cards) => cards.get(index),
        }
    }
}

pub fn build_card(entry: &FileEntry, now: DateTime<Local>) -> CardView {
    CardView {
        category: category_for_name(&entry.name),
        display_name: sanitize_display_name(&entry.name),
        size_label: format_file_size(entry.size),
        modified_label: format_modified(&entry.modified, now),
        download: BoundAction::download(entry.name.clone()),
        delete: BoundAction::delete(entry.name.clone()),
    }
}

/// Build the grid for a snapshot. Server order is kept as is.
pub fn build_grid(snapshot: &[FileEntry], now: DateTime<Local>) -> GridView {
    if snapshot.is_empty() {
        return GridView::Empty;
    }
    GridView::Cards(snapshot.iter().map(|entry| build_card(entry, now)).collect())
}
