//! Header and tab strip renderer.
//!
//! Renders the centered title line followed by one tab per view, with the
//! active tab highlighted.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, TabItem};
use std::fmt::Write;

/// Renders the header title bar.
///
/// Displays the title centered horizontally with bold styling and theme colors.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
///
/// Padding is split evenly on both sides to center the title. If the width
/// cannot evenly divide, the right padding is slightly larger.
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title_len = header.title.chars().count();
    let padding = (cols.saturating_sub(title_len)) / 2;

    let _ = writeln!(
        out,
        "{}{}{}{}{}{}",
        theme.bold(),
        theme.fg(&theme.colors.header_fg),
        " ".repeat(padding),
        header.title,
        " ".repeat(cols.saturating_sub(padding + title_len)),
        theme.reset()
    );
}

/// Renders the tab strip, e.g. `[1] Upload    2  Documents    3  Search`.
///
/// The active tab is drawn with the `tab_active_*` colors and bracketed so it
/// stays distinguishable without colors.
pub fn render_tabs(out: &mut String, tabs: &[TabItem], theme: &Theme) {
    let rendered: Vec<String> = tabs
        .iter()
        .map(|tab| {
            if tab.is_active {
                format!(
                    "{}{}{}[{}] {}{}",
                    theme.bold(),
                    theme.fg(&theme.colors.tab_active_fg),
                    theme.bg(&theme.colors.tab_active_bg),
                    tab.number,
                    tab.label,
                    theme.reset()
                )
            } else {
                format!(
                    "{} {}  {}{}",
                    theme.fg(&theme.colors.text_dim),
                    tab.number,
                    tab.label,
                    theme.reset()
                )
            }
        })
        .collect();

    let _ = writeln!(out, " {}", rendered.join("   "));
}
