//! File type detection and name handling
//!
//! Pure functions for classifying stored files and making their names safe
//! to show in the terminal or write to the local filesystem.

/// Broad file category used to pick a card icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Image,
    Document,
    Text,
    Spreadsheet,
    Presentation,
    Archive,
    Audio,
    Video,
    Code,
    Python,
    Java,
    Web,
    Data,
    Database,
    Executable,
    Mobile,
    DiskImage,
    Other,
}

/// Lower-cased extension of a file name, if it has one
///
/// # Examples
/// ```
/// use filedeck::logic::file::extension;
///
/// assert_eq!(extension("Photo.JPG"), Some("jpg".to_string()));
/// assert_eq!(extension("archive.tar.gz"), Some("gz".to_string()));
/// assert_eq!(extension("README"), None);
/// assert_eq!(extension("trailing."), None);
/// ```
pub fn extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}

/// Map a file name to its category by extension.
///
/// Unknown or missing extensions fall back to [`FileCategory::Other`].
pub fn category_for_name(name: &str) -> FileCategory {
    let Some(ext) = extension(name) else {
        return FileCategory::Other;
    };

    match ext.as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" | "bmp" => FileCategory::Image,
        "pdf" | "txt" | "md" => FileCategory::Text,
        "doc" | "docx" => FileCategory::Document,
        "xls" | "xlsx" | "csv" => FileCategory::Spreadsheet,
        "ppt" | "pptx" => FileCategory::Presentation,
        "zip" | "rar" | "7z" | "tar" | "gz" => FileCategory::Archive,
        "mp3" | "wav" | "flac" | "aac" | "ogg" => FileCategory::Audio,
        "mp4" | "avi" | "mkv" | "mov" | "wmv" => FileCategory::Video,
        "js" | "cpp" | "c" | "php" => FileCategory::Code,
        "py" => FileCategory::Python,
        "java" => FileCategory::Java,
        "css" | "html" => FileCategory::Web,
        "json" | "xml" => FileCategory::Data,
        "sql" => FileCategory::Database,
        "exe" => FileCategory::Executable,
        "apk" => FileCategory::Mobile,
        "iso" | "dmg" => FileCategory::DiskImage,
        _ => FileCategory::Other,
    }
}

/// Make a server-provided name safe to print in the terminal
///
/// Control characters (ESC, newlines, tabs, DEL, C1 controls) are replaced
/// with U+FFFD so a name cannot move the cursor or emit escape sequences.
/// Only ever used for display; actions keep the literal name.
///
/// # Examples
/// ```
/// use filedeck::logic::file::sanitize_display_name;
///
/// assert_eq!(sanitize_display_name("a\"b.txt"), "a\"b.txt");
/// assert_eq!(sanitize_display_name("x\x1b[2Jy"), "x\u{FFFD}[2Jy");
/// ```
pub fn sanitize_display_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { '\u{FFFD}' } else { c })
        .collect()
}

/// Turn a server-provided name into a single local path component
///
/// Path separators and control characters become `_`; `.`/`..` and empty
/// names become `download`.
pub fn safe_local_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = cleaned.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        "download".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Name for the n-th collision of `name` (`report.pdf` → `report (2).pdf`)
pub fn numbered_file_name(name: &str, n: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{} ({}).{}", stem, n, ext)
        }
        _ => format!("{} ({})", name, n),
    }
}
