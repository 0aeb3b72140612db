//! Phase status bar renderer.

use crate::app::PhaseStatus;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PhaseLine;
use std::fmt::Write;

/// Renders one line per phase: label, colored status and optional detail.
///
/// # Layout
///
/// ```text
///  Upload      ok       at 14:03:12 UTC
///  Documents   working
///  Search      failed   search request failed: backend returned HTTP 500
/// ```
pub fn render_status(out: &mut String, phases: &[PhaseLine], theme: &Theme) {
    for line in phases {
        let color = match line.status {
            PhaseStatus::Idle => &theme.colors.text_dim,
            PhaseStatus::InFlight => &theme.colors.busy_fg,
            PhaseStatus::Succeeded => &theme.colors.success_fg,
            PhaseStatus::Failed => &theme.colors.error_fg,
        };

        let Some(detail) = &line.detail else {
            let _ = writeln!(out, " {:<11} {}", line.label, theme.paint(color, line.status.label()));
            continue;
        };

        let status = theme.paint(color, &format!("{:<8}", line.status.label()));
        match line.status {
            PhaseStatus::Failed => {
                let _ = writeln!(out, " {:<11} {status} {}", line.label, theme.paint(&theme.colors.error_fg, detail));
            }
            _ => {
                let _ = writeln!(out, " {:<11} {status} {}{detail}{}", line.label, theme.dim(), theme.reset());
            }
        }
    }
}
