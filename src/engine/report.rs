/// Report formatting: human-readable and JSON renderings of clone reports.
use std::io::Write;

use serde::Serialize;

use crate::engine::model::CloneReport;

#[derive(Serialize)]
struct JsonGroup {
    lines_a: [usize; 2],
    lines_b: [usize; 2],
    line_count: usize,
    token_count: usize,
}

#[derive(Serialize)]
struct JsonReport {
    file_a: String,
    file_b: String,
    total_cloned_lines: usize,
    groups: Vec<JsonGroup>,
}

#[derive(Serialize)]
struct JsonOutput {
    clone_reports: Vec<JsonReport>,
    total_pairs: usize,
}

fn to_json_output(reports: &[CloneReport]) -> JsonOutput {
    let clone_reports = reports
        .iter()
        .map(|r| JsonReport {
            file_a: r.file_a.display().to_string(),
            file_b: r.file_b.display().to_string(),
            total_cloned_lines: r.total_cloned_lines,
            groups: r
                .groups
                .iter()
                .map(|g| JsonGroup {
                    lines_a: [g.lines_a.0, g.lines_a.1],
                    lines_b: [g.lines_b.0, g.lines_b.1],
                    line_count: g.line_count,
                    token_count: g.token_count,
                })
                .collect(),
        })
        .collect();
    JsonOutput {
        clone_reports,
        total_pairs: reports.len(),
    }
}

/// Render reports as the JSON schema: `{clone_reports: [...], total_pairs}`.
pub fn format_json(reports: &[CloneReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_json_output(reports))
}

/// Write the JSON rendering to `out`.
pub fn print_json(reports: &[CloneReport], out: &mut impl Write) -> std::io::Result<()> {
    let json = format_json(reports).map_err(std::io::Error::other)?;
    writeln!(out, "{json}")
}

/// Write the human-readable rendering to `out`.
pub fn print_human(reports: &[CloneReport], out: &mut impl Write) -> std::io::Result<()> {
    if reports.is_empty() {
        return writeln!(out, "No clones detected.");
    }

    writeln!(out, "Found potential clones in {} file pair(s):\n", reports.len())?;
    for report in reports {
        writeln!(out, "  {}  <->  {}", report.file_a.display(), report.file_b.display())?;
        for group in &report.groups {
            writeln!(
                out,
                "    Lines {}-{} <-> Lines {}-{} ({} lines, {} tokens)",
                group.lines_a.0, group.lines_a.1, group.lines_b.0, group.lines_b.1, group.line_count, group.token_count
            )?;
        }
        writeln!(out, "    Total cloned lines: {}\n", report.total_cloned_lines)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
