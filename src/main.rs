//! relo CLI - watch files and re-run a command whenever they change
//!
//! Usage: relo [OPTIONS] <WATCH>... -- <COMMAND> [ARGS]...
//!
//! Resolves the command line against configuration and prints the plan the
//! watch/run supervisor executes.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use relo::cli::{self, Intercept};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("relo: error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = std::env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| anyhow::anyhow!("argument is not valid UTF-8: {:?}", raw))
        })
        .collect::<Result<Vec<String>>>()?;

    match cli::intercept(&args) {
        Some(Intercept::Help) => {
            print!("{}", cli::help());
            return Ok(ExitCode::SUCCESS);
        }
        Some(Intercept::Version) => {
            print!("{}", cli::version());
            return Ok(ExitCode::SUCCESS);
        }
        None => {}
    }

    let cwd = std::env::current_dir().context("could not determine the working directory")?;
    let loaded = relo::config::load_or_default(Some(&cwd))?;

    relo::logging::init(loaded.config.output.verbosity);
    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    match &loaded.source {
        Some(path) => debug!(path = %path.display(), "loaded configuration"),
        None => debug!("no configuration file found, using defaults"),
    }

    let options = match relo::parse_with_defaults(args, &loaded.config.defaults) {
        Ok(options) => options,
        Err(err) => {
            debug!(error = ?err, "command line rejected");
            eprintln!("relo: error: {}", err);
            eprintln!("Run 'relo --help' for usage.");
            return Ok(ExitCode::from(err.exit_code()));
        }
    };

    info!(
        watches = options.watches().len(),
        program = options.program(),
        signal = %options.signal(),
        "command line accepted"
    );

    println!(
        "{}",
        relo::report::render(&options, loaded.config.output.format)
    );

    Ok(ExitCode::SUCCESS)
}
