//! CLI result presenter.

use dfbench_orchestration::interfaces::{
    Agreement, EngineRun, GenerationReport, PipelineReport, ResultPresenter,
};

use crate::output::{format_number, format_seconds, max_line_width, preview_table, render_columns};
use crate::ui::{print_error, print_success, print_subheader, print_warning};

/// Heading printed above the engine panels.
pub const TRANSFORMATION_TITLE: &str = "Transformation: Average Salary by First Letter of Name";

const COLUMN_GAP: usize = 4;
const MIN_COLUMN_WIDTH: usize = 28;

/// Plain-text presenter with engines laid out side by side.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
    preview_rows: usize,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, preview_rows: usize) -> Self {
        Self {
            verbose,
            quiet,
            preview_rows,
        }
    }

    /// Status line for a finished generation.
    #[must_use]
    pub fn generation_line(generation: &GenerationReport) -> String {
        let mut line = format!(
            "Dataset with {} rows generated in {} sec!",
            format_number(generation.rows),
            format_seconds(generation.elapsed, 2)
        );
        if generation.cache.is_hit() {
            line.push_str(" (cached)");
        }
        line
    }

    /// Lines of one engine panel: label, timing, preview.
    #[must_use]
    pub fn panel(&self, run: &EngineRun) -> Vec<String> {
        let mut lines = vec![
            run.label.clone(),
            format!("Execution Time: {} sec", format_seconds(run.duration, 4)),
        ];
        if self.verbose {
            lines.push(format!(
                "Load Time: {} sec",
                format_seconds(run.load_duration, 4)
            ));
        }
        lines.push(String::new());
        lines.extend(preview_table(run.result.head(self.preview_rows)));
        lines
    }

    /// All panels rendered as one block of text.
    #[must_use]
    pub fn render_runs(&self, runs: &[EngineRun]) -> String {
        let columns: Vec<Vec<String>> = runs.iter().map(|run| self.panel(run)).collect();
        let width = max_line_width(&columns).max(MIN_COLUMN_WIDTH);
        render_columns(&columns, width, COLUMN_GAP)
    }

    /// Plain-text report without colors, as written by `--output`.
    #[must_use]
    pub fn render_report(&self, report: &PipelineReport) -> String {
        let mut out = format!("{}\n\n", Self::generation_line(&report.generation));
        out.push_str(TRANSFORMATION_TITLE);
        out.push_str("\n\n");
        out.push_str(&self.render_runs(&report.runs));
        match &report.agreement {
            Agreement::Verified => out.push_str("\nAll engines agree\n"),
            Agreement::Mismatch(detail) => {
                out.push_str(&format!("\nWarning: engines disagree: {detail}\n"));
            }
            Agreement::NotChecked => {}
        }
        out
    }
}

impl ResultPresenter for CliPresenter {
    fn present_generation(&self, generation: &GenerationReport) {
        if self.quiet {
            return;
        }
        println!("{}", Self::generation_line(generation));
        println!();
    }

    fn present_runs(&self, runs: &[EngineRun]) {
        if !self.quiet {
            print_subheader(TRANSFORMATION_TITLE);
            println!();
        }
        print!("{}", self.render_runs(runs));
    }

    fn present_agreement(&self, agreement: &Agreement) {
        match agreement {
            Agreement::Verified if !self.quiet => {
                println!();
                print_success("All engines agree");
            }
            Agreement::Mismatch(detail) => print_warning(&format!("engines disagree: {detail}")),
            _ => {}
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
