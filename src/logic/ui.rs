//! UI timing logic
//!
//! Pure functions deciding when transient UI elements expire.

/// How long a notification stays visible
pub const TOAST_DURATION_MS: u64 = 3000;

/// Default debounce between a settled upload batch and its list reload
pub const RELOAD_DELAY_MS: u64 = 500;

/// Whether a toast shown `elapsed_ms` ago should be hidden
///
/// # Examples
/// ```
/// use filedeck::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(2999, 3000));
/// assert!(should_dismiss_toast(3000, 3000));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128, duration_ms: u64) -> bool {
    elapsed_ms >= duration_ms as u128
}

/// Frame of the activity spinner for a monotonically increasing tick
pub fn spinner_frame(tick: u64) -> &'static str {
    const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_visible_before_duration() {
        assert!(!should_dismiss_toast(0, TOAST_DURATION_MS));
        assert!(!should_dismiss_toast(1500, TOAST_DURATION_MS));
    }

    #[test]
    fn test_toast_dismissed_after_duration() {
        assert!(should_dismiss_toast(3000, TOAST_DURATION_MS));
        assert!(should_dismiss_toast(10_000, TOAST_DURATION_MS));
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), "|");
        assert_eq!(spinner_frame(4), "|");
        assert_eq!(spinner_frame(5), "/");
    }
}
