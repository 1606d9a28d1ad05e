//! TUI application model (Elm architecture).

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;

use dfbench_cli::output::{format_number, format_seconds};
use dfbench_cli::presenter::CliPresenter;
use dfbench_core::cache::DatasetCache;
use dfbench_core::constants::{MAX_ROWS, MIN_ROWS};
use dfbench_orchestration::interfaces::{GenerationReport, PipelineReport};

use crate::chart::render_timings;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::LogPanel;
use crate::messages::{PipelineRequest, SystemMetrics, TuiMessage};
use crate::metrics::render_metrics;
use crate::panels::render_engine_panels;
use crate::slider::{render_slider, step_rows};
use crate::styles::THEME;

const PAGE_SIZE: usize = 10;
const TICK_RATE: Duration = Duration::from_millis(100);

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub header: Rect,
    pub slider: Rect,
    pub status: Rect,
    pub panels: Rect,
    pub timings: Rect,
    pub info: Rect,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Row count selected on the slider.
    pub rows: usize,
    /// Number of preview groups per engine panel.
    pub preview_rows: usize,
    /// Whether the latest request is still running.
    pub running: bool,
    /// One-line pipeline status.
    pub status: String,
    /// Last completed report for the latest request.
    pub report: Option<PipelineReport>,
    /// Log lines.
    pub logs: LogPanel,
    /// Show logs toggle.
    pub show_logs: bool,
    /// Latest system metrics.
    pub metrics: SystemMetrics,
    /// When the latest request was sent.
    pub started_at: Option<Instant>,
    /// Incoming messages from the worker and metrics threads.
    rx: Receiver<TuiMessage>,
    /// Outgoing pipeline requests.
    requests: Sender<PipelineRequest>,
    /// Generation of the latest request; older messages are dropped.
    generation: u64,
    /// Shared with the worker to show how many datasets are memoized.
    cache: Option<Arc<DatasetCache>>,
}

impl TuiApp {
    /// Create a new TUI app starting at `rows`.
    #[must_use]
    pub fn new(
        rx: Receiver<TuiMessage>,
        requests: Sender<PipelineRequest>,
        rows: usize,
        preview_rows: usize,
    ) -> Self {
        Self {
            should_quit: false,
            rows: rows.clamp(MIN_ROWS, MAX_ROWS),
            preview_rows,
            running: false,
            status: "Idle".to_string(),
            report: None,
            logs: LogPanel::new(),
            show_logs: true,
            metrics: SystemMetrics {
                cpu_percent: 0.0,
                memory_mb: 0.0,
            },
            started_at: None,
            rx,
            requests,
            generation: 0,
            cache: None,
        }
    }

    /// Show the occupancy of `cache` in the metrics panel.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<DatasetCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Get the current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ask the worker for a pass at the current row count.
    pub fn request_run(&mut self) {
        self.generation += 1;
        self.running = true;
        self.started_at = Some(Instant::now());
        self.status = format!("Generating dataset of {} rows...", format_number(self.rows));
        let request = PipelineRequest {
            generation: self.generation,
            rows: self.rows,
        };
        tracing::debug!(generation = request.generation, rows = request.rows, "pipeline requested");
        if self.requests.send(request).is_err() {
            self.running = false;
            self.status = "Pipeline worker is not running".to_string();
            self.logs.push("[ERROR] pipeline worker is not running".to_string());
        }
    }

    /// Move the slider to `rows`, re-running if it changed.
    pub fn set_rows(&mut self, rows: usize) {
        let rows = rows.clamp(MIN_ROWS, MAX_ROWS);
        if rows != self.rows {
            self.rows = rows;
            self.request_run();
        }
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Whether `msg` belongs to an older request than the latest.
    fn is_stale(&self, msg: &TuiMessage) -> bool {
        msg.generation().is_some_and(|g| g != self.generation)
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        if self.is_stale(&msg) {
            tracing::trace!(generation = ?msg.generation(), "dropping stale message");
            return;
        }
        match msg {
            TuiMessage::Started { rows, .. } => {
                self.status = format!("Generating dataset of {} rows...", format_number(rows));
            }
            TuiMessage::Generated { elapsed, cache, .. } => {
                self.status = format!(
                    "{} Running engines...",
                    CliPresenter::generation_line(&GenerationReport {
                        rows: self.rows,
                        elapsed,
                        cache,
                    })
                );
            }
            TuiMessage::EngineFinished {
                engine, duration, ..
            } => {
                tracing::debug!(engine = %engine, ?duration, "engine finished");
            }
            TuiMessage::Completed { report, .. } => {
                self.running = false;
                self.status = CliPresenter::generation_line(&report.generation);
                if report.agreement.is_mismatch() {
                    self.status.push_str(" Engines disagree, see logs.");
                }
                self.report = Some(*report);
            }
            TuiMessage::Failed { error, .. } => {
                self.running = false;
                self.status = format!("Error: {error}");
                self.logs.push(format!("[ERROR] {error}"));
            }
            TuiMessage::Log { line, .. } => self.logs.push(line),
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::SystemMetrics(metrics) => self.metrics = metrics,
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::Cancel => self.should_quit = true,
            KeyAction::Decrease => self.set_rows(step_rows(self.rows, -1)),
            KeyAction::Increase => self.set_rows(step_rows(self.rows, 1)),
            KeyAction::Minimum => self.set_rows(MIN_ROWS),
            KeyAction::Maximum => self.set_rows(MAX_ROWS),
            KeyAction::Rerun => self.request_run(),
            KeyAction::ToggleLogs => self.show_logs = !self.show_logs,
            KeyAction::ScrollUp => self.logs.scroll_up(1),
            KeyAction::ScrollDown => self.logs.scroll_down(1),
            KeyAction::PageUp => self.logs.scroll_up(PAGE_SIZE),
            KeyAction::PageDown => self.logs.scroll_down(PAGE_SIZE),
            KeyAction::None => {}
        }
    }

    /// Time since the latest request was sent.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|t| t.elapsed())
    }

    /// Split the screen into its panels.
    #[must_use]
    pub fn compute_layout(area: Rect) -> ScreenLayout {
        let [header, slider, status, panels, timings, info, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(3), // slider
                Constraint::Length(1), // status
                Constraint::Min(10),   // engine panels
                Constraint::Length(9), // timing gauges
                Constraint::Length(8), // logs + metrics
                Constraint::Length(2), // footer
            ])
            .areas(area);
        ScreenLayout {
            header,
            slider,
            status,
            panels,
            timings,
            info,
            footer,
        }
    }

    /// Split the info row into metrics (left) and logs (right).
    #[must_use]
    pub fn compute_info_layout(info_area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(info_area);
        (chunks[0], chunks[1])
    }

    fn status_line(&self) -> Line<'_> {
        let style = if self.status.starts_with("Error") {
            THEME.error_style()
        } else if self.running {
            THEME.warning_style()
        } else {
            THEME.success_style()
        };
        let mut text = self.status.clone();
        if self.running {
            if let Some(elapsed) = self.elapsed() {
                text.push_str(&format!(" [{} sec]", format_seconds(elapsed, 1)));
            }
        }
        Line::styled(text, style)
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area());

        render_header(frame, layout.header, self.rows, self.generation);
        render_slider(frame, layout.slider, self.rows);
        frame.render_widget(Paragraph::new(self.status_line()), layout.status);

        let runs = self.report.as_ref().map_or(&[][..], |r| r.runs.as_slice());
        render_engine_panels(frame, layout.panels, runs, self.preview_rows);

        let timings: Vec<(&str, Duration)> = runs
            .iter()
            .map(|r| (r.label.as_str(), r.duration))
            .collect();
        render_timings(frame, layout.timings, &timings);

        let cached = self.cache.as_ref().map_or(0, |c| c.len());
        if self.show_logs {
            let (metrics_area, logs_area) = Self::compute_info_layout(layout.info);
            render_metrics(frame, metrics_area, self.metrics, cached);
            self.logs.render(frame, logs_area);
        } else {
            render_metrics(frame, layout.info, self.metrics, cached);
        }

        render_footer(frame, layout.footer);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sends the first request, then polls input, drains messages and
    /// redraws until the user quits. The terminal is restored even when
    /// the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        self.request_run();
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(TICK_RATE)? {
                // Resize needs no handling: the next draw picks up the new size.
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_action(map_key(key));
                    }
                }
            }

            self.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use dfbench_core::aggregate::{AggregateResult, GroupMean, Precision};
    use dfbench_core::cache::CacheStatus;
    use dfbench_core::constants::{DEFAULT_ROWS, ROW_STEP};
    use dfbench_orchestration::interfaces::{Agreement, EngineRun};
    use ratatui::backend::TestBackend;

    struct Harness {
        app: TuiApp,
        tx: Sender<TuiMessage>,
        requests: Receiver<PipelineRequest>,
    }

    fn harness() -> Harness {
        let (tx, rx) = unbounded();
        let (req_tx, requests) = unbounded();
        Harness {
            app: TuiApp::new(rx, req_tx, DEFAULT_ROWS, 5),
            tx,
            requests,
        }
    }

    fn log(generation: u64, line: &str) -> TuiMessage {
        TuiMessage::Log {
            generation,
            line: line.to_string(),
        }
    }

    fn report(rows: usize, mean: f64) -> PipelineReport {
        PipelineReport {
            generation: GenerationReport {
                rows,
                elapsed: Duration::from_millis(20),
                cache: CacheStatus::Miss,
            },
            runs: vec![EngineRun {
                engine: "frame".into(),
                label: "Frame".into(),
                rows,
                load_duration: Duration::ZERO,
                duration: Duration::from_millis(3),
                result: AggregateResult::new(
                    vec![GroupMean {
                        first_letter: 'A',
                        mean_salary: mean,
                    }],
                    Precision::Double,
                ),
            }],
            agreement: Agreement::Verified,
        }
    }

    fn completed(generation: u64, rows: usize, mean: f64) -> TuiMessage {
        TuiMessage::Completed {
            generation,
            report: Box::new(report(rows, mean)),
        }
    }

    #[test]
    fn initial_state() {
        let h = harness();
        assert!(!h.app.should_quit);
        assert_eq!(h.app.rows, DEFAULT_ROWS);
        assert_eq!(h.app.generation(), 0);
        assert!(h.app.report.is_none());
        assert!(h.app.logs.is_empty());
        assert!(h.app.show_logs);
        assert!(h.app.elapsed().is_none());
    }

    #[test]
    fn initial_rows_are_clamped() {
        let (_tx, rx) = unbounded();
        let (req_tx, _req_rx) = unbounded();
        assert_eq!(TuiApp::new(rx, req_tx, 5, 5).rows, MIN_ROWS);
    }

    #[test]
    fn request_run_sends_generation() {
        let mut h = harness();
        h.app.request_run();
        assert!(h.app.running);
        assert_eq!(
            h.requests.try_recv().unwrap(),
            PipelineRequest {
                generation: 1,
                rows: DEFAULT_ROWS,
            }
        );
    }

    #[test]
    fn slider_keys_send_requests() {
        let mut h = harness();
        h.app.handle_key_action(KeyAction::Increase);
        assert_eq!(h.app.rows, DEFAULT_ROWS + ROW_STEP);
        h.app.handle_key_action(KeyAction::Decrease);
        h.app.handle_key_action(KeyAction::Decrease);
        assert_eq!(h.app.rows, DEFAULT_ROWS - ROW_STEP);
        h.app.handle_key_action(KeyAction::Maximum);
        assert_eq!(h.app.rows, MAX_ROWS);
        h.app.handle_key_action(KeyAction::Minimum);
        assert_eq!(h.app.rows, MIN_ROWS);

        let sent: Vec<PipelineRequest> = h.requests.try_iter().collect();
        assert_eq!(sent.len(), 5);
        assert_eq!(sent.last().unwrap().rows, MIN_ROWS);
        assert_eq!(sent.last().unwrap().generation, 5);
    }

    #[test]
    fn slider_returns_to_grid_from_minimum() {
        let mut h = harness();
        h.app.set_rows(ROW_STEP);
        h.app.handle_key_action(KeyAction::Decrease);
        assert_eq!(h.app.rows, MIN_ROWS);
        h.app.handle_key_action(KeyAction::Increase);
        assert_eq!(h.app.rows, ROW_STEP);
    }

    #[test]
    fn unchanged_rows_do_not_rerun() {
        let mut h = harness();
        h.app.set_rows(MAX_ROWS);
        h.app.handle_key_action(KeyAction::Increase);
        h.app.set_rows(MAX_ROWS + 1);
        assert_eq!(h.requests.try_iter().count(), 1);
        assert_eq!(h.app.generation(), 1);
    }

    #[test]
    fn rerun_key_repeats_current_rows() {
        let mut h = harness();
        h.app.handle_key_action(KeyAction::Rerun);
        h.app.handle_key_action(KeyAction::Rerun);
        let sent: Vec<PipelineRequest> = h.requests.try_iter().collect();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|r| r.rows == DEFAULT_ROWS));
    }

    #[test]
    fn completed_message_updates_report() {
        let mut h = harness();
        h.app.request_run();
        h.tx.send(completed(1, DEFAULT_ROWS, 50_000.0)).unwrap();
        h.app.update();
        assert!(!h.app.running);
        let report = h.app.report.as_ref().unwrap();
        assert_eq!(report.runs[0].result.get('A'), Some(50_000.0));
        assert_eq!(h.app.status, "Dataset with 100,000 rows generated in 0.02 sec!");
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut h = harness();
        h.app.set_rows(200_000);
        h.app.set_rows(300_000);
        assert_eq!(h.app.generation(), 2);

        // First request finishes after the second was sent.
        h.tx.send(completed(1, 200_000, 1.0)).unwrap();
        h.app.update();
        assert!(h.app.report.is_none());
        assert!(h.app.running);

        h.tx.send(completed(2, 300_000, 2.0)).unwrap();
        h.app.update();
        let report = h.app.report.as_ref().unwrap();
        assert_eq!(report.generation.rows, 300_000);
        assert!(!h.app.running);
    }

    #[test]
    fn stale_failure_is_dropped() {
        let mut h = harness();
        h.app.request_run();
        h.app.request_run();
        h.app.handle_message(TuiMessage::Failed {
            generation: 1,
            error: "old".into(),
        });
        assert!(h.app.running);
        assert!(h.app.logs.is_empty());
    }

    #[test]
    fn failure_logs_error() {
        let mut h = harness();
        h.app.request_run();
        h.app.handle_message(TuiMessage::Failed {
            generation: 1,
            error: "engine arrow failed".into(),
        });
        assert!(!h.app.running);
        assert!(h.app.status.starts_with("Error"));
        assert!(h.app.logs.lines().back().unwrap().contains("engine arrow failed"));
    }

    #[test]
    fn generated_message_updates_status() {
        let mut h = harness();
        h.app.request_run();
        h.app.handle_message(TuiMessage::Generated {
            generation: 1,
            elapsed: Duration::from_millis(10),
            cache: CacheStatus::Hit,
        });
        assert!(h.app.status.contains("(cached)"));
    }

    #[test]
    fn mismatch_flagged_in_status() {
        let mut h = harness();
        h.app.request_run();
        let mut r = report(DEFAULT_ROWS, 1.0);
        r.agreement = Agreement::Mismatch("arrow: A differs".into());
        h.app.handle_message(TuiMessage::Completed {
            generation: 1,
            report: Box::new(r),
        });
        assert!(h.app.status.contains("disagree"));
    }

    #[test]
    fn closed_worker_reports_error() {
        let (_tx, rx) = unbounded();
        let (req_tx, req_rx) = unbounded();
        drop(req_rx);
        let mut app = TuiApp::new(rx, req_tx, DEFAULT_ROWS, 5);
        app.request_run();
        assert!(!app.running);
        assert_eq!(app.logs.len(), 1);
    }

    #[test]
    fn log_and_metrics_messages() {
        let mut h = harness();
        h.app.handle_message(log(0, "hello"));
        h.app.handle_message(TuiMessage::SystemMetrics(SystemMetrics {
            cpu_percent: 75.0,
            memory_mb: 2048.0,
        }));
        assert_eq!(h.app.logs.len(), 1);
        assert!((h.app.metrics.cpu_percent - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quit_and_toggle() {
        let mut h = harness();
        h.app.handle_key_action(KeyAction::ToggleLogs);
        assert!(!h.app.show_logs);
        h.app.handle_message(TuiMessage::KeyPress(KeyAction::Cancel));
        assert!(h.app.should_quit);
    }

    #[test]
    fn scroll_keys_move_logs() {
        let mut h = harness();
        for i in 0..30 {
            h.app.handle_message(log(0, &format!("log {i}")));
        }
        h.app.handle_key_action(KeyAction::PageUp);
        assert_eq!(h.app.logs.offset(), 19);
        h.app.handle_key_action(KeyAction::ScrollUp);
        assert_eq!(h.app.logs.offset(), 18);
        h.app.handle_key_action(KeyAction::PageDown);
        h.app.handle_key_action(KeyAction::ScrollDown);
        assert!(h.app.logs.auto_scroll());
    }

    #[test]
    fn stale_log_lines_dropped() {
        let mut h = harness();
        h.app.request_run();
        h.app.request_run();
        h.app.handle_message(log(1, "#1 Frame: 26 groups"));
        h.app.handle_message(log(2, "#2 Frame: 26 groups"));
        assert_eq!(h.app.logs.len(), 1);
        assert_eq!(h.app.logs.lines().front().map(String::as_str), Some("#2 Frame: 26 groups"));
    }

    #[test]
    fn layout_fills_area() {
        let area = Rect::new(0, 0, 120, 50);
        let l = TuiApp::compute_layout(area);
        assert_eq!(l.header.y, 0);
        assert_eq!(l.footer.y + l.footer.height, area.height);
        let total = l.header.height
            + l.slider.height
            + l.status.height
            + l.panels.height
            + l.timings.height
            + l.info.height
            + l.footer.height;
        assert_eq!(total, area.height);
        assert!(l.panels.height >= 10);
    }

    #[test]
    fn render_full_screen() {
        let mut h = harness();
        h.app.request_run();
        h.app.handle_message(completed(1, DEFAULT_ROWS, 65_432.1));
        h.app.handle_message(log(1, "[WARN] something"));

        let mut terminal = Terminal::new(TestBackend::new(120, 45)).unwrap();
        let out = terminal.draw(|frame| h.app.render(frame)).unwrap();
        let text: String = (0..out.area.height)
            .flat_map(|y| (0..out.area.width).map(move |x| (x, y)))
            .map(|pos| out.buffer[pos].symbol().to_string())
            .collect();
        assert!(text.contains("N=100,000"));
        assert!(text.contains("Frame"));
        assert!(text.contains("65432.10"));
        assert!(text.contains("[WARN] something"));
        assert!(text.contains("quit"));
    }

    #[test]
    fn render_without_logs_or_report() {
        let mut h = harness();
        h.app.show_logs = false;
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| h.app.render(frame)).unwrap();
        h.app.running = true;
        terminal.draw(|frame| h.app.render(frame)).unwrap();
    }
}
