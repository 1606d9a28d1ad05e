//! Engine timing gauges.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use dfbench_cli::output::format_seconds;

use crate::styles::THEME;

/// Share of the slowest time taken by `duration`.
#[must_use]
pub fn relative_ratio(duration: Duration, slowest: Duration) -> f64 {
    if slowest.is_zero() {
        return 0.0;
    }
    (duration.as_secs_f64() / slowest.as_secs_f64()).clamp(0.0, 1.0)
}

/// Render one gauge per engine, scaled to the slowest engine.
#[allow(clippy::cast_possible_truncation)]
pub fn render_timings(frame: &mut Frame, area: Rect, timings: &[(&str, Duration)]) {
    if timings.is_empty() {
        return;
    }

    let slowest = timings
        .iter()
        .map(|&(_, d)| d)
        .max()
        .unwrap_or(Duration::ZERO);
    let height = area.height as usize;
    let per_gauge = (height / timings.len()).max(1);

    for (i, &(label, duration)) in timings.iter().enumerate() {
        let y = area.y + (i * per_gauge) as u16;
        if y >= area.y + area.height {
            break;
        }

        let gauge_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: per_gauge.min((area.y + area.height - y) as usize) as u16,
        };

        let style = if duration == slowest {
            THEME.warning_style()
        } else {
            Style::default().fg(THEME.success)
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(" {label} ")))
            .gauge_style(style)
            .ratio(relative_ratio(duration, slowest))
            .label(format!("{} sec", format_seconds(duration, 4)));

        frame.render_widget(gauge, gauge_area);
    }
}
