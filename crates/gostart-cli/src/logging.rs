//! Diagnostics go to stderr through a `tracing` subscriber installed here.
//! The library crates emit events and never install one themselves.
//!
//! Verbosity starts at `warn`. Each `-v` raises it one step up to `trace`,
//! and `--quiet` pins it to `error`. A set `RUST_LOG` replaces the computed
//! filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Targets that receive the computed level.
const LOG_TARGETS: [&str; 3] = ["gostart", "gostart_core", "gostart_adapters"];

/// Install the process-wide subscriber. A second call fails.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(filter_directives(level_for(args))),
    };

    let events = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn filter_directives(level: LevelFilter) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
