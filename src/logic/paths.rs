//! Dropped path parsing
//!
//! Terminals deliver files dropped onto them as pasted text. Depending on the
//! terminal this is a newline-separated list, a space-separated list with
//! shell quoting or backslash escapes, or `file://` URIs. The picker prompt
//! accepts the same syntax.

use std::path::{Path, PathBuf};

/// Split pasted text into individual paths
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use filedeck::logic::paths::parse_dropped_paths;
///
/// assert_eq!(
///     parse_dropped_paths("'/tmp/my file.txt' /tmp/b\\ c.png"),
///     vec![PathBuf::from("/tmp/my file.txt"), PathBuf::from("/tmp/b c.png")]
/// );
/// assert_eq!(
///     parse_dropped_paths("file:///tmp/x%20y.txt"),
///     vec![PathBuf::from("/tmp/x y.txt")]
/// );
/// ```
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // One URI per line (text/uri-list)
        if line.starts_with("file://") {
            if let Some(path) = file_uri_to_path(line) {
                paths.push(path);
            }
            continue;
        }

        // Some terminals paste one unquoted path per line
        if line.contains(' ') && Path::new(line).exists() {
            paths.push(PathBuf::from(line));
            continue;
        }

        for word in split_shell_words(line) {
            if let Some(path) = word_to_path(&word) {
                paths.push(path);
            }
        }
    }

    paths
}

fn word_to_path(word: &str) -> Option<PathBuf> {
    if word.is_empty() {
        return None;
    }
    if word.starts_with("file://") {
        return file_uri_to_path(word);
    }
    Some(PathBuf::from(word))
}

/// Convert a `file://` URI into a local path (host part ignored)
pub fn file_uri_to_path(uri: &str) -> Option<PathBuf> {
    let rest = uri.strip_prefix("file://")?;
    let path = match rest.find('/') {
        Some(0) => rest,
        Some(idx) => &rest[idx..],
        None => return None,
    };
    let decoded = urlencoding::decode(path).ok()?;
    Some(PathBuf::from(decoded.into_owned()))
}

/// Split a line on unquoted whitespace, honouring `'…'`, `"…"` and `\x`
fn split_shell_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some('\'') => {
                if c == '\'' {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            Some(_) => match c {
                '"' => quote = None,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\' | '$' | '`')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => current.push('\\'),
                },
                _ => current.push(c),
            },
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                _ => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if in_word {
        words.push(current);
    }

    words
}
