//! `gostart`: scaffolds Go services and keeps their aggregator and
//! bootstrap files in step with the components on disk.
//!
//! Arguments are parsed before anything else, so `--help` and usage errors
//! never touch logging or configuration. Failures leave through
//! [`CliError::exit_code`]: 2 for bad input, 3 for a missing project, module
//! or template, 4 for unreadable configuration and 1 for everything else.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(usage) => {
            // --help and --version land here too, on stdout with status 0.
            let _ = usage.print();
            return ExitCode::from(if usage.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("gostart: {e}");
        return ExitCode::from(1);
    }
    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        dir = %cli.global.dir.display(),
        "Arguments parsed"
    );

    let mut report = ErrorReport {
        verbose: cli.global.verbose > 0,
        color: !cli.global.no_color,
    };

    let config = match AppConfig::load(cli.global.config.as_deref(), &cli.global.dir) {
        Ok(config) => config,
        Err(e) => return report.fail(CliError::config(e)),
    };
    report.color &= !config.output.no_color;

    let output = OutputManager::new(&cli.global, &config);
    match run(cli, config, output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => report.fail(e),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let global = &cli.global;
    match cli.command {
        Commands::Create(cmd) => commands::create::execute(cmd, global, config, output),
        Commands::Init(args) => commands::init::execute(args, global, config, output),
        Commands::Docker(args) => commands::docker::execute(args, global, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, global, config, output),
    }
}

/// How a fatal error is printed to stderr.
struct ErrorReport {
    verbose: bool,
    color: bool,
}

impl ErrorReport {
    fn fail(&self, err: CliError) -> ExitCode {
        err.log();
        let text = if self.color && std::io::stderr().is_terminal() {
            err.format_colored(self.verbose)
        } else {
            err.format_plain(self.verbose)
        };
        eprint!("{text}");
        ExitCode::from(err.exit_code())
    }
}
