//! Empty state component renderer.
//!
//! This module renders the message shown in place of the active view's body
//! when it has nothing to display.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::fmt::Write;

/// Renders the empty state message.
///
/// Displays a centered two-line message, preceded by one blank line. The
/// message uses the `empty_state_fg` theme color, and the subtitle uses
/// `text_dim` with dim styling.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE
/// [left padding] subtitle
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_padding = (cols.saturating_sub(empty.message.chars().count())) / 2;
    let sub_padding = (cols.saturating_sub(empty.subtitle.chars().count())) / 2;

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}{}",
        " ".repeat(msg_padding),
        theme.paint(&theme.colors.empty_state_fg, &empty.message)
    );
    let _ = writeln!(
        out,
        "{}{}{}{}{}",
        " ".repeat(sub_padding),
        theme.dim(),
        theme.fg(&theme.colors.text_dim),
        empty.subtitle,
        theme.reset()
    );
}
