//! Presentation: renders engine results for the terminal.
//!
//! Pure formatting over engine result types; no engine calls here.

use crate::engine::{SnapshotSummary, VerifyReport};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Snapshot success line with the hashed file count.
pub fn render_snapshot_summary(summary: &SnapshotSummary) -> String {
    format!(
        "{} Saved digests for {} files to {}.",
        "Baseline updated.".green().bold(),
        summary.file_count,
        summary.baseline_path.display()
    )
}

/// Human-readable verify report.
///
/// A clean tree renders as a single success line; otherwise a table of
/// changed paths (plus unchanged ones when `include_unchanged` is set).
pub fn render_verify_text(report: &VerifyReport, include_unchanged: bool) -> String {
    let mut out = String::new();

    if report.is_clean() && !include_unchanged {
        out.push_str(&format!(
            "{} All {} files match the baseline.\n",
            "OK".green().bold(),
            report.file_count()
        ));
        return out;
    }

    out.push_str(&format!("{}\n\n", format_section_heading("Changes")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["State", "Path"]);
    for record in &report.records {
        if !include_unchanged && !record.is_change() {
            continue;
        }
        table.add_row(vec![record.state().to_string(), record.path().to_string()]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!(
        "Total: {} files, {} changed.\n",
        report.file_count(),
        report.change_count()
    ));
    out
}

/// JSON rendering of the verify records.
pub fn render_verify_json(
    report: &VerifyReport,
    include_unchanged: bool,
) -> Result<String, serde_json::Error> {
    if include_unchanged {
        serde_json::to_string_pretty(&report.records)
    } else {
        let changes: Vec<_> = report.changes().collect();
        serde_json::to_string_pretty(&changes)
    }
}
