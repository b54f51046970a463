use std::process::ExitCode;

use clap::Parser;

use graphwalk::cli::{run, verbosity_filter, Cli};
use graphwalk::config::load_config;
use graphwalk::observability::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(verbosity_filter(cli.verbose), &config.logging.filter);

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    // run() flushes stdout, so a closed pipe surfaces as an error here.
    match run(&cli, &config, stdin, &mut stdout) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
