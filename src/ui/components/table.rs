//! Documents view renderer.
//!
//! Renders the cached document list as a table with NAME, SIZE, TYPE, PAGES
//! and MODIFIED columns. Each row is followed by the storage path and the
//! chunk previews, indented and dimmed.

use crate::ui::helpers::pad_to_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DocumentItem;
use std::fmt::Write;

const SIZE_COLUMN_WIDTH: usize = 11;
const TYPE_COLUMN_WIDTH: usize = 18;
const PAGES_COLUMN_WIDTH: usize = 12;

fn name_width(cols: usize) -> usize {
    cols.saturating_sub(SIZE_COLUMN_WIDTH + TYPE_COLUMN_WIDTH + PAGES_COLUMN_WIDTH + 24)
        .max(12)
}

/// Renders the table column headers.
pub fn render_table_headers(out: &mut String, theme: &Theme, cols: usize) {
    let _ = writeln!(
        out,
        " {}{}{} {} {} {} MODIFIED{}",
        theme.bold(),
        theme.fg(&theme.colors.header_fg),
        pad_to_width("NAME", name_width(cols)),
        pad_to_width("SIZE", SIZE_COLUMN_WIDTH),
        pad_to_width("TYPE", TYPE_COLUMN_WIDTH),
        pad_to_width("PAGES", PAGES_COLUMN_WIDTH),
        theme.reset()
    );
}

/// Renders all documents in server order.
pub fn render_table_rows(out: &mut String, items: &[DocumentItem], theme: &Theme, cols: usize) {
    for item in items {
        render_table_row(out, item, theme, cols);
    }
}

/// Renders a single document followed by its path and chunk previews.
///
/// # Layout
///
/// ```text
///  report.pdf        1.50 KB     application/pdf    1, 2        2024-01-02
///      /data/uploads/report.pdf
///      p.1  First two hundred characters of the chunk...
/// ```
fn render_table_row(out: &mut String, item: &DocumentItem, theme: &Theme, cols: usize) {
    let _ = writeln!(
        out,
        " {}{}{} {} {} {} {}",
        theme.fg(&theme.colors.accent_fg),
        pad_to_width(&item.filename, name_width(cols)),
        theme.reset(),
        pad_to_width(&item.size, SIZE_COLUMN_WIDTH),
        pad_to_width(&item.file_type, TYPE_COLUMN_WIDTH),
        pad_to_width(&item.pages, PAGES_COLUMN_WIDTH),
        item.modified
    );

    let _ = writeln!(
        out,
        "     {}{}{} (created {}){}",
        theme.dim(),
        theme.fg(&theme.colors.text_dim),
        item.path,
        item.created,
        theme.reset()
    );

    for chunk in &item.chunks {
        let _ = writeln!(
            out,
            "     {}p.{:<4}{} {}",
            theme.fg(&theme.colors.text_dim),
            chunk.page,
            theme.reset(),
            chunk.text.replace('\n', " ")
        );
    }
}
