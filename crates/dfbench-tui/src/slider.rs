//! Row-count slider.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use dfbench_cli::output::format_number;
use dfbench_core::constants::{MAX_ROWS, MIN_ROWS, ROW_STEP};

use crate::styles::THEME;

/// Move `rows` by `steps` slider stops, clamped to the valid range.
///
/// Stops are the multiples of `ROW_STEP` plus the lower bound, so an
/// off-grid value snaps to the next stop in the direction of travel.
#[must_use]
pub fn step_rows(rows: usize, steps: isize) -> usize {
    let n = steps.unsigned_abs();
    let stop = if steps < 0 {
        rows.div_ceil(ROW_STEP).saturating_sub(n)
    } else {
        (rows / ROW_STEP).saturating_add(n)
    };
    stop.saturating_mul(ROW_STEP).clamp(MIN_ROWS, MAX_ROWS)
}

/// Fraction of the slider range `rows` sits at.
#[must_use]
pub fn slider_ratio(rows: usize) -> f64 {
    let rows = rows.clamp(MIN_ROWS, MAX_ROWS);
    (rows - MIN_ROWS) as f64 / (MAX_ROWS - MIN_ROWS) as f64
}

/// Render the slider as a labelled gauge.
pub fn render_slider(frame: &mut Frame, area: Rect, rows: usize) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(THEME.border_style())
                .title(" Number of rows "),
        )
        .gauge_style(Style::default().fg(THEME.primary))
        .ratio(slider_ratio(rows))
        .label(format!(
            "{} ({} to {})",
            format_number(rows),
            format_number(MIN_ROWS),
            format_number(MAX_ROWS)
        ));
    frame.render_widget(gauge, area);
}
