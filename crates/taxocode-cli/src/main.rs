mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}\nProgram terminated.", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();

    // Checked before logging is set up: `--log-file` would otherwise create a file.
    let input_arg = config::resolve_input_arg(&cli.inputs)?;

    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("Taxocode CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match commands::encode::run(&cli, input_arg) {
        Ok(result) => {
            let message = commands::encode::outcome_message(&result);
            info!("{}", message);
            println!("✅ {}", message);
            Ok(())
        }
        Err(e) => {
            debug!("Run aborted: {:?}", e);
            Err(e)
        }
    }
}
