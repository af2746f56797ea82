//! Option Payoff CLI
//!
//! Interactive portfolio builder. Add options from the menu, then open the
//! payoff chart.

use std::io;
use std::process::ExitCode;

use option_payoff::prelude::*;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter("option_payoff=warn")
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = AppConfig::default();
    let mut viewer = EguiViewer::new(config.viewer.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::with_config(stdin.lock(), stdout.lock(), config);

    match session.run(&mut viewer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Session aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
