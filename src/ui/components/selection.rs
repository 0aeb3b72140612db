//! Upload view renderer: the files selected for the next upload.

use crate::ui::helpers::pad_to_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SelectionItem;
use std::fmt::Write;

const SIZE_COLUMN_WIDTH: usize = 12;
const TYPE_COLUMN_WIDTH: usize = 28;

/// Renders the selection as a NAME / SIZE / TYPE table.
///
/// While an upload is in flight a notice replaces the upload hint, since the
/// selection cannot change until it completes.
pub fn render_selection(out: &mut String, items: &[SelectionItem], uploading: bool, theme: &Theme, cols: usize) {
    let name_width = cols.saturating_sub(SIZE_COLUMN_WIDTH + TYPE_COLUMN_WIDTH + 3).max(10);

    let _ = writeln!(
        out,
        " {}{}{} {} TYPE{}",
        theme.bold(),
        theme.fg(&theme.colors.header_fg),
        pad_to_width("NAME", name_width),
        pad_to_width("SIZE", SIZE_COLUMN_WIDTH),
        theme.reset()
    );

    for item in items {
        let _ = writeln!(
            out,
            " {}{} {} {}{}",
            theme.fg(&theme.colors.text_normal),
            pad_to_width(&item.name, name_width),
            pad_to_width(&item.size, SIZE_COLUMN_WIDTH),
            pad_to_width(&item.mime_type, TYPE_COLUMN_WIDTH).trim_end(),
            theme.reset()
        );
    }

    let notice = if uploading {
        theme.paint(&theme.colors.busy_fg, "Uploading... selection is locked until the server answers")
    } else {
        format!("{}{} file(s) ready, use `upload` to index them{}", theme.dim(), items.len(), theme.reset())
    };
    let _ = writeln!(out);
    let _ = writeln!(out, " {notice}");
}
