//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use dfbench_cli::output::format_number;

use crate::styles::THEME;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, rows: usize, generation: u64) {
    let text = vec![Line::from(vec![
        Span::styled("Data Processing Comparison", THEME.header_style()),
        Span::raw(format!(" | N={} | Run #{generation}", format_number(rows))),
    ])];

    let block = Block::default().borders(Borders::BOTTOM);

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn header_shows_row_count() {
        let backend = TestBackend::new(80, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| render_header(frame, frame.area(), 250_000, 4))
            .unwrap();
        let row: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.contains("N=250,000"));
        assert!(row.contains("Run #4"));
    }
}
