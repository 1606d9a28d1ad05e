//! Side-by-side engine result panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;

use dfbench_cli::output::format_seconds;
use dfbench_orchestration::interfaces::EngineRun;

use crate::styles::THEME;

/// Render one panel per engine run, left to right.
pub fn render_engine_panels(frame: &mut Frame, area: Rect, runs: &[EngineRun], preview_rows: usize) {
    if runs.is_empty() {
        let placeholder = Paragraph::new(Line::styled("Waiting for results...", THEME.muted_style()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(THEME.border_style())
                    .title(" Transformation: Average Salary by First Letter of Name "),
            );
        frame.render_widget(placeholder, area);
        return;
    }

    let constraints: Vec<Constraint> = runs
        .iter()
        .map(|_| Constraint::Ratio(1, u32::try_from(runs.len()).unwrap_or(u32::MAX)))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (run, column) in runs.iter().zip(columns.iter()) {
        render_engine_panel(frame, *column, run, preview_rows);
    }
}

fn render_engine_panel(frame: &mut Frame, area: Rect, run: &EngineRun, preview_rows: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(THEME.border_style())
        .title(Line::styled(format!(" {} ", run.label), THEME.header_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [timing_area, table_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .areas(inner);

    let timing = Paragraph::new(Line::raw(format!(
        "Execution Time: {} sec",
        format_seconds(run.duration, 4)
    )));
    frame.render_widget(timing, timing_area);

    let rows = run
        .result
        .head(preview_rows)
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Row::new(vec![
                i.to_string(),
                g.first_letter.to_string(),
                format!("{:.2}", g.mean_salary),
            ])
        });
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(12),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(vec!["", "first_letter", "salary"]).style(THEME.muted_style()));
    frame.render_widget(table, table_area);
}
