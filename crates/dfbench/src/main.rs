//! dfbench: compare group-by engines on synthetic data.

use std::process::ExitCode;

use dfbench_cli::ui::print_error;
use dfbench_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();
    logging::init(&config);

    let code = match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            print_error(&format!("{e:#}"));
            errors::exit_code(&e)
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
