//! Bounded, scrollable log panel.

use std::collections::VecDeque;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::THEME;

/// Maximum number of lines kept.
pub const LOG_CAPACITY: usize = 500;

/// Log lines with a scroll position.
///
/// The offset is the first visible line. While `auto_scroll` is set the
/// view follows new lines.
#[derive(Debug, Clone)]
pub struct LogPanel {
    lines: VecDeque<String>,
    offset: usize,
    auto_scroll: bool,
}

impl LogPanel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: VecDeque::new(),
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Append a line, dropping the oldest beyond capacity.
    pub fn push(&mut self, line: String) {
        self.lines.push_back(line);
        if self.lines.len() > LOG_CAPACITY {
            self.lines.pop_front();
            self.offset = self.offset.saturating_sub(1);
        }
        if self.auto_scroll {
            self.offset = self.last_index();
        }
    }

    #[must_use]
    pub fn lines(&self) -> &VecDeque<String> {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.last_index());
        if self.offset == self.last_index() {
            self.auto_scroll = true;
        }
    }

    fn last_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Render the panel into `area`.
    ///
    /// Following the tail keeps the newest line on the bottom row rather
    /// than alone at the top.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let total = self.lines.len();
        let start = if self.auto_scroll {
            total.saturating_sub(visible)
        } else {
            self.offset
        };

        let items: Vec<ListItem> = self
            .lines
            .iter()
            .skip(start)
            .take(visible)
            .map(|line| ListItem::new(Line::raw(line.as_str())).style(line_style(line)))
            .collect();

        let title = if total > visible {
            let pct = (start * 100) / total.saturating_sub(visible).max(1);
            format!(" Logs ({}%) ", pct.min(100))
        } else {
            " Logs ".to_string()
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(THEME.muted_style()),
        );
        frame.render_widget(list, area);
    }
}

impl Default for LogPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn line_style(line: &str) -> Style {
    if line.starts_with("[ERROR]") {
        THEME.error_style()
    } else if line.starts_with("[WARN]") {
        THEME.warning_style()
    } else {
        Style::default()
    }
}
