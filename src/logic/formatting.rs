//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary units and at most two decimals
///
/// Trailing zeros are dropped, so whole values print without a fraction.
///
/// # Examples
/// ```
/// use filedeck::logic::formatting::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(1048576), "1 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Parse a server timestamp.
///
/// The server sends local time as `YYYY-MM-DD HH:MM:SS`; RFC 3339 is accepted
/// as well.
pub fn parse_modified(timestamp: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").ok()?;
    Local.from_local_datetime(&naive).earliest()
}

/// Format a modification time relative to `now`
///
/// Under a minute shows "just now", then minutes, hours and days up to a week.
/// Older (or future) timestamps show the date. Unparseable input is shown
/// verbatim.
pub fn format_modified(timestamp: &str, now: DateTime<Local>) -> String {
    let Some(modified) = parse_modified(timestamp) else {
        return timestamp.to_string();
    };

    let elapsed = now.signed_duration_since(modified);
    let seconds = elapsed.num_seconds();

    if seconds < 0 {
        return modified.format("%Y-%m-%d").to_string();
    }

    match seconds {
        0..=59 => "just now".to_string(),
        60..=3599 => plural(seconds / 60, "minute"),
        3600..=86399 => plural(seconds / 3600, "hour"),
        86400..=604799 => plural(seconds / 86400, "day"),
        _ => modified.format("%Y-%m-%d").to_string(),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
