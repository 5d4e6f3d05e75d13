// src/utils.rs

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};
use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Anchors a relative path at `base`; absolute paths pass through.
pub fn resolve_under(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Replaces every run of whitespace (including leading/trailing runs) with `with`.
pub fn replace_whitespace(text: &str, with: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), with).into_owned()
}

pub fn truncate_text(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut end_pos = 0;
    for (i, c) in text.char_indices() {
        width += if c.is_ascii() { 1 } else { 2 };
        if width > max_width.saturating_sub(3) {
            end_pos = i;
            break;
        }
    }
    if end_pos == 0 { text.to_string() } else { format!("{}...", &text[..end_pos]) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_whitespace() {
        assert_eq!(replace_whitespace("Lecture 01 File", "_"), "Lecture_01_File");
        assert_eq!(replace_whitespace("  Week\n  1 \t notes ", "_"), "Week_1_notes");
        assert_eq!(replace_whitespace("Week 1.pdf", ""), "Week1.pdf");
        assert_eq!(replace_whitespace("", "_"), "");
    }

    #[test]
    fn test_resolve_under() {
        assert_eq!(resolve_under(Path::new("/a"), Path::new("b/c")), PathBuf::from("/a/b/c"));
        assert_eq!(resolve_under(Path::new("/a"), Path::new("/x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short.pdf", 20), "short.pdf");
        let long = "a_very_long_lecture_filename_that_goes_on.pdf";
        let truncated = truncate_text(long, 20);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 20);
    }
}
