//! Search view renderer: the active query and its ranked results.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{QueryInfo, ResultItem};
use std::fmt::Write;

/// Renders the query line, e.g. `Query: "invoice totals" (limit 3)`.
pub fn render_query(out: &mut String, query: &QueryInfo, theme: &Theme) {
    let _ = writeln!(
        out,
        " {}Query:{} \"{}\" {}(limit {}){}",
        theme.bold(),
        theme.reset(),
        query.text,
        theme.dim(),
        query.limit,
        theme.reset()
    );
    let _ = writeln!(out);
}

/// Renders results in server order, one numbered paragraph each.
pub fn render_results(out: &mut String, results: &[ResultItem], theme: &Theme) {
    for item in results {
        let rank = format!("{:>3}.", item.rank);
        let _ = writeln!(out, " {} {}", theme.paint(&theme.colors.accent_fg, &rank), item.text.trim());
    }
}
