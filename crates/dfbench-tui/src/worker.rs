//! Background pipeline worker.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};

use dfbench_core::cache::DatasetCache;
use dfbench_core::engine::Engine;
use dfbench_core::options::Options;
use dfbench_orchestration::interfaces::ResultPresenter;
use dfbench_orchestration::orchestrator::run_pipeline;

use crate::bridge::{TuiBridgeObserver, TuiResultPresenter};
use crate::messages::{PipelineRequest, TuiMessage};

/// Everything the worker needs to run a pipeline pass.
pub struct PipelineWorker {
    pub cache: Arc<DatasetCache>,
    pub engines: Vec<Arc<dyn Engine>>,
    pub opts: Options,
    pub verify: bool,
}

impl PipelineWorker {
    /// Run passes until the request channel closes.
    ///
    /// Requests that queued up while a pass was running are skipped in
    /// favour of the newest one.
    pub fn run(&self, requests: &Receiver<PipelineRequest>, tx: &Sender<TuiMessage>) {
        while let Ok(first) = requests.recv() {
            let request = requests.try_iter().last().unwrap_or(first);
            if request != first {
                tracing::debug!(
                    skipped_to = request.generation,
                    from = first.generation,
                    "dropping superseded requests"
                );
            }
            self.run_one(request, tx);
        }
        tracing::debug!("request channel closed, worker exiting");
    }

    /// Run a single pass and report it on `tx`.
    pub fn run_one(&self, request: PipelineRequest, tx: &Sender<TuiMessage>) {
        let observer = TuiBridgeObserver::new(tx.clone(), request.generation);
        let presenter = TuiResultPresenter::new(tx.clone(), request.generation);
        match run_pipeline(
            &self.cache,
            &self.engines,
            request.rows,
            &self.opts,
            self.verify,
            &observer,
        ) {
            Ok(report) => {
                presenter.present_report(&report);
                let _ = tx.send(TuiMessage::Completed {
                    generation: request.generation,
                    report: Box::new(report),
                });
            }
            Err(e) => {
                tracing::error!(generation = request.generation, "pipeline failed: {e}");
                presenter.present_error(&e.to_string());
            }
        }
    }

    /// Move the worker onto its own thread.
    pub fn spawn(
        self,
        requests: Receiver<PipelineRequest>,
        tx: Sender<TuiMessage>,
    ) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("dfbench-pipeline".into())
            .spawn(move || self.run(&requests, &tx))
    }
}
