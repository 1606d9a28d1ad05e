//! System metrics panel with sysinfo collection.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::Sender;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use sysinfo::System;

use crate::messages::{SystemMetrics, TuiMessage};
use crate::styles::THEME;

/// Interval between metric samples.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Metrics collector using sysinfo.
pub struct MetricsCollector {
    system: System,
    /// Last collected CPU usage (0.0 - 100.0).
    pub cpu_percent: f64,
    /// Last collected memory usage in MB.
    pub memory_mb: f64,
}

impl MetricsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            system: System::new(),
            cpu_percent: 0.0,
            memory_mb: 0.0,
        }
    }

    /// Refresh system metrics.
    pub fn refresh(&mut self) {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        // Average CPU across all cores
        let cpus = self.system.cpus();
        if !cpus.is_empty() {
            self.cpu_percent =
                cpus.iter().map(|c| f64::from(c.cpu_usage())).sum::<f64>() / cpus.len() as f64;
        }

        self.memory_mb = self.system.used_memory() as f64 / (1024.0 * 1024.0);
    }

    #[must_use]
    pub fn snapshot(&self) -> SystemMetrics {
        SystemMetrics {
            cpu_percent: self.cpu_percent,
            memory_mb: self.memory_mb,
        }
    }

    /// Sample on a background thread until the receiving side hangs up.
    pub fn spawn(mut self, tx: Sender<TuiMessage>) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("dfbench-metrics".into())
            .spawn(move || loop {
                self.refresh();
                if tx.send(TuiMessage::SystemMetrics(self.snapshot())).is_err() {
                    break;
                }
                thread::sleep(SAMPLE_INTERVAL);
            })
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the metrics panel.
pub fn render_metrics(frame: &mut Frame, area: Rect, metrics: SystemMetrics, cached_datasets: usize) {
    let text = vec![
        Line::raw(format!("CPU:      {:.0}%", metrics.cpu_percent)),
        Line::raw(format!("Memory:   {:.1} MB", metrics.memory_mb)),
        Line::raw(format!("Cached:   {cached_datasets} dataset(s)")),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" System ")
        .border_style(THEME.muted_style());

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
