//! Shared formatting utilities.
//!
//! Used by the view model computation to turn raw domain values into
//! display-ready strings, and by components for column layout. All functions
//! operate on character counts, not byte offsets, so multi-byte text is never
//! split inside a code point.

use crate::domain::PageLabel;

/// Formats a byte count as a human-readable size with two decimals.
///
/// Units step by 1024 from `B` up to `TB`.
///
/// # Example
///
/// ```
/// use ragdesk::ui::helpers::format_file_size;
///
/// assert_eq!(format_file_size(512), "512.00 B");
/// assert_eq!(format_file_size(1536), "1.50 KB");
/// assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut size = bytes as f64;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }

    format!("{size:.2} {unit}")
}

/// Joins page labels with `", "`, or `"-"` when there are none.
#[must_use]
pub fn format_pages(pages: &[PageLabel]) -> String {
    if pages.is_empty() {
        return "-".to_string();
    }
    pages.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Truncates `text` to at most `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Right-pads `text` with spaces to `width` characters.
///
/// Longer text is cut and marked with `...`.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let keep = width.saturating_sub(3);
        let head: String = text.chars().take(keep).collect();
        format!("{head}...")
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_step_through_units() {
        assert_eq!(format_file_size(0), "0.00 B");
        assert_eq!(format_file_size(512), "512.00 B");
        assert_eq!(format_file_size(1023), "1023.00 B");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.00 GB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 * 1024), "3.00 TB");
        assert_eq!(format_file_size(u64::MAX), "16777216.00 TB");
    }

    #[test]
    fn pages_are_joined() {
        assert_eq!(format_pages(&[1.into(), 2.into(), 10.into()]), "1, 2, 10");
        assert_eq!(format_pages(&[PageLabel::Label("iv".to_string()), 1.into()]), "iv, 1");
        assert_eq!(format_pages(&[]), "-");
    }

    #[test]
    fn previews_are_cut_on_char_boundaries() {
        assert_eq!(truncate_preview("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_preview("short", 5), "short");
        assert_eq!(truncate_preview("", 5), "");
    }

    #[test]
    fn padding_fills_or_cuts() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdefgh", 6), "abc...");
    }
}
