//! Footer component renderer.
//!
//! This module renders the footer help bar with centered command hints.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use std::fmt::Write;

/// Renders the footer help bar.
///
/// Displays command hints centered horizontally with dimmed styling.
///
/// # Truncation
///
/// If the help text exceeds the width, it is cut to fit.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let help_text: String = footer.keybindings.chars().take(cols).collect();
    let padding = (cols.saturating_sub(help_text.chars().count())) / 2;

    let _ = writeln!(
        out,
        "{}{}{help_text}{}",
        theme.fg(&theme.colors.text_dim),
        " ".repeat(padding),
        theme.reset()
    );
}
