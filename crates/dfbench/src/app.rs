//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::Result;

use dfbench_cli::output::write_to_file;
use dfbench_cli::presenter::CliPresenter;
use dfbench_cli::progress::SpinnerObserver;
use dfbench_cli::report::to_json;
use dfbench_cli::ui::print_header;
use dfbench_core::cache::DatasetCache;
use dfbench_core::constants::exit_codes;
use dfbench_core::registry::DefaultFactory;
use dfbench_orchestration::engine_selection::get_engines_to_run;
use dfbench_orchestration::interfaces::{PipelineReport, ResultPresenter};
use dfbench_orchestration::orchestrator::run_pipeline;
use dfbench_tui::{MetricsCollector, PipelineRequest, PipelineWorker, TuiApp, TuiMessage};

use crate::config::{AppConfig, OutputFormat};

const TITLE: &str = "Data Processing Comparison";

/// Run the application, returning the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        dfbench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    // Handle TUI mode
    if config.tui {
        run_tui(config)?;
        return Ok(exit_codes::SUCCESS);
    }

    // CLI mode
    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<i32> {
    let opts = config.options();
    let factory = DefaultFactory::new();
    let engines = get_engines_to_run(&config.engine, &factory)?;
    let cache = DatasetCache::new(config.generator(), config.cache_capacity);
    let text = config.format == OutputFormat::Text;

    if text && !config.quiet {
        print_header(TITLE);
    }

    let spinner = SpinnerObserver::new(config.quiet || !text);
    let report = run_pipeline(
        &cache,
        &engines,
        config.rows,
        &opts,
        config.verify(),
        &spinner,
    );
    spinner.finish();
    let report = report?;
    tracing::info!(
        rows = report.generation.rows,
        slowest = ?report.slowest(),
        "pipeline finished"
    );

    let presenter = CliPresenter::new(config.verbose, config.quiet, config.preview_rows);
    match config.format {
        OutputFormat::Text => presenter.present_report(&report),
        OutputFormat::Json => println!("{}", to_json(&report)?),
    }

    if let Some(path) = &config.output {
        write_to_file(path, &render_for_file(config, &presenter, &report)?)?;
        tracing::info!(path = %path, "report written");
    }

    if report.agreement.is_mismatch() {
        Ok(exit_codes::ERROR_MISMATCH)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

fn render_for_file(
    config: &AppConfig,
    presenter: &CliPresenter,
    report: &PipelineReport,
) -> Result<String> {
    Ok(match config.format {
        OutputFormat::Text => presenter.render_report(report),
        OutputFormat::Json => to_json(report)?,
    })
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let factory = DefaultFactory::new();
    let engines = get_engines_to_run(&config.engine, &factory)?;
    let cache = Arc::new(DatasetCache::new(config.generator(), config.cache_capacity));

    // Create crossbeam channels: results to the TUI, requests to the worker
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    let (req_tx, req_rx) = crossbeam_channel::unbounded::<PipelineRequest>();

    // Spawn metrics collection thread
    MetricsCollector::new().spawn(tx.clone())?;

    // Spawn the pipeline worker; it exits once the app drops its request sender
    let worker = PipelineWorker {
        cache: Arc::clone(&cache),
        engines,
        opts: config.options(),
        verify: config.verify(),
    };
    worker.spawn(req_rx, tx)?;

    // Run TUI event loop on the main thread
    let mut app = TuiApp::new(rx, req_tx, config.rows, config.preview_rows).with_cache(cache);
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
