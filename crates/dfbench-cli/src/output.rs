//! CLI output formatting.

use std::borrow::Cow;
use std::io::{self, Write};
use std::time::Duration;

use console::{measure_text_width, pad_str, Alignment};

use dfbench_core::aggregate::GroupMean;

/// Seconds with a fixed number of decimals, e.g. `0.0123`.
#[must_use]
pub fn format_seconds(d: Duration, decimals: usize) -> String {
    format!("{:.*}", decimals, d.as_secs_f64())
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Preview table of grouped means with a positional index, header first.
#[must_use]
pub fn preview_table(groups: &[GroupMean]) -> Vec<String> {
    let mut lines = Vec::with_capacity(groups.len() + 1);
    lines.push(format!("{:<3} {:<12} {:>10}", "", "first_letter", "salary"));
    for (i, g) in groups.iter().enumerate() {
        lines.push(format!(
            "{i:<3} {:<12} {:>10.2}",
            g.first_letter, g.mean_salary
        ));
    }
    lines
}

/// Lay out columns of lines side by side, each padded or truncated to `width`.
#[must_use]
pub fn render_columns(columns: &[Vec<String>], width: usize, gap: usize) -> String {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    let spacer = " ".repeat(gap);
    let mut out = String::new();
    for row in 0..height {
        let cells: Vec<Cow<'_, str>> = columns
            .iter()
            .map(|col| {
                let cell = col.get(row).map_or("", String::as_str);
                pad_str(cell, width, Alignment::Left, Some("…"))
            })
            .collect();
        out.push_str(cells.join(spacer.as_str()).trim_end());
        out.push('\n');
    }
    out
}

/// Widest line across all columns, as displayed.
#[must_use]
pub fn max_line_width(columns: &[Vec<String>]) -> usize {
    columns
        .iter()
        .flatten()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0)
}

/// Write a report to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        writeln!(file)?;
    }
    Ok(())
}
