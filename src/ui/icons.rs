use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::logic::file::FileCategory;
use crate::model::NotificationKind;

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📄, 📦, etc.)
    NerdFont, // Nerd Fonts icons (U+F15B, etc.)
}

impl IconMode {
    /// Parse the `icon_mode` config value; unknown values fall back to emoji
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "nerdfont" | "nerd" | "nf" => IconMode::NerdFont,
            _ => IconMode::Emoji,
        }
    }
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub file_color: Color,
    pub media_color: Color,
    pub archive_color: Color,
    pub code_color: Color,
    pub success_color: Color,
    pub error_color: Color,
    pub warning_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            file_color: Color::Cyan,
            media_color: Color::Magenta,
            archive_color: Color::Yellow,
            code_color: Color::Blue,
            success_color: Color::Green,
            error_color: Color::Red,
            warning_color: Color::Yellow,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
#[derive(Debug, Clone)]
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    pub fn mode(&self) -> IconMode {
        self.mode
    }

    pub fn theme(&self) -> &IconTheme {
        &self.theme
    }

    /// Glyph for a file category
    pub fn category_glyph(&self, category: FileCategory) -> &'static str {
        let (emoji, nerd) = match category {
            FileCategory::Image => ("📷", "\u{F1C5}"),
            FileCategory::Document => ("📝", "\u{F1C2}"),
            FileCategory::Text => ("📄", "\u{F15C}"),
            FileCategory::Spreadsheet => ("📊", "\u{F1C3}"),
            FileCategory::Presentation => ("📈", "\u{F1C4}"),
            FileCategory::Archive => ("📦", "\u{F1C6}"),
            FileCategory::Audio => ("🎵", "\u{F1C7}"),
            FileCategory::Video => ("🎬", "\u{F1C8}"),
            FileCategory::Code => ("💻", "\u{F1C9}"),
            FileCategory::Python => ("🐍", "\u{E606}"),
            FileCategory::Java => ("☕", "\u{E738}"),
            FileCategory::Web => ("🌐", "\u{F0AC}"),
            FileCategory::Data => ("📋", "\u{E60B}"),
            FileCategory::Database => ("💾", "\u{F1C0}"),
            FileCategory::Executable => ("🔧", "\u{F013}"),
            FileCategory::Mobile => ("📱", "\u{F10B}"),
            FileCategory::DiskImage => ("💿", "\u{F0A0}"),
            FileCategory::Other => ("📁", "\u{F15B}"),
        };

        match self.mode {
            IconMode::Emoji => emoji,
            IconMode::NerdFont => nerd,
        }
    }

    /// Styled icon span for a card header
    pub fn category_icon(&self, category: FileCategory) -> Span<'static> {
        let color = match category {
            FileCategory::Image | FileCategory::Audio | FileCategory::Video => self.theme.media_color,
            FileCategory::Archive | FileCategory::DiskImage => self.theme.archive_color,
            FileCategory::Code
            | FileCategory::Python
            | FileCategory::Java
            | FileCategory::Web
            | FileCategory::Data
            | FileCategory::Database => self.theme.code_color,
            _ => self.theme.file_color,
        };

        Span::styled(format!("{} ", self.category_glyph(category)), Style::default().fg(color))
    }

    /// Icon and color for a notification
    pub fn notification_icon(&self, kind: NotificationKind) -> (&'static str, Color) {
        match (kind, self.mode) {
            (NotificationKind::Success, IconMode::Emoji) => ("✓ ", self.theme.success_color),
            (NotificationKind::Error, IconMode::Emoji) => ("✗ ", self.theme.error_color),
            (NotificationKind::Warning, IconMode::Emoji) => ("⚠ ", self.theme.warning_color),
            (NotificationKind::Success, IconMode::NerdFont) => ("\u{F00C} ", self.theme.success_color),
            (NotificationKind::Error, IconMode::NerdFont) => ("\u{F00D} ", self.theme.error_color),
            (NotificationKind::Warning, IconMode::NerdFont) => ("\u{F071} ", self.theme.warning_color),
        }
    }
}
