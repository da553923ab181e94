//! Grid layout calculation logic
//!
//! Pure functions for laying out file cards and moving the selection
//! around the grid.

/// Width of one card including its border
pub const CARD_WIDTH: u16 = 26;

/// Height of one card including its border
pub const CARD_HEIGHT: u16 = 7;

/// Number of card columns that fit in `content_width` (at least 1)
///
/// # Examples
/// ```
/// use filedeck::logic::layout::grid_columns;
///
/// assert_eq!(grid_columns(80), 3);
/// assert_eq!(grid_columns(10), 1);
/// ```
pub fn grid_columns(content_width: u16) -> usize {
    (content_width / CARD_WIDTH).max(1) as usize
}

/// Number of full card rows that fit in `content_height` (at least 1)
pub fn grid_rows(content_height: u16) -> usize {
    (content_height / CARD_HEIGHT).max(1) as usize
}

/// First row to draw so the selected card stays on screen
///
/// Keeps the previous offset when the selection is still visible, otherwise
/// scrolls just enough to reveal it.
pub fn scroll_offset(
    selected: Option<usize>,
    columns: usize,
    visible_rows: usize,
    current_offset: usize,
) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    let columns = columns.max(1);
    let visible_rows = visible_rows.max(1);
    let row = selected / columns;

    if row < current_offset {
        row
    } else if row >= current_offset + visible_rows {
        row + 1 - visible_rows
    } else {
        current_offset
    }
}

/// Direction of a selection move in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Calculate the new selection after a move
///
/// Left/right step through cards in reading order; up/down move a whole row
/// and stop at the edges instead of wrapping.
///
/// # Examples
/// ```
/// use filedeck::logic::layout::{move_selection, GridMove};
///
/// // 7 cards in 3 columns
/// assert_eq!(move_selection(None, 7, 3, GridMove::Right), Some(0));
/// assert_eq!(move_selection(Some(1), 7, 3, GridMove::Down), Some(4));
/// assert_eq!(move_selection(Some(4), 7, 3, GridMove::Down), Some(6)); // clamps to last card
/// assert_eq!(move_selection(Some(0), 7, 3, GridMove::Up), Some(0));
/// assert_eq!(move_selection(Some(3), 0, 3, GridMove::Down), None);
/// ```
pub fn move_selection(
    current: Option<usize>,
    len: usize,
    columns: usize,
    movement: GridMove,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let columns = columns.max(1);

    let Some(current) = current.map(|c| c.min(last)) else {
        return Some(match movement {
            GridMove::Last => last,
            _ => 0,
        });
    };

    Some(match movement {
        GridMove::Left => current.saturating_sub(1),
        GridMove::Right => (current + 1).min(last),
        GridMove::Up => current.checked_sub(columns).unwrap_or(current),
        GridMove::Down => {
            let same_row = current / columns == last / columns;
            if same_row {
                current
            } else {
                (current + columns).min(last)
            }
        }
        GridMove::First => 0,
        GridMove::Last => last,
    })
}

/// Keep a selection valid after the snapshot is replaced
///
/// # Examples
/// ```
/// use filedeck::logic::layout::clamp_selection;
///
/// assert_eq!(clamp_selection(Some(5), 3), Some(2));
/// assert_eq!(clamp_selection(Some(1), 3), Some(1));
/// assert_eq!(clamp_selection(None, 3), Some(0));
/// assert_eq!(clamp_selection(Some(1), 0), None);
/// ```
pub fn clamp_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(len - 1))
}
