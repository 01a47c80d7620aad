//! Implementation of `gostart create`.
//!
//! Responsibility: build the component service over the local project and
//! display what it did. No business logic lives here.

use tracing::{info, instrument};

use gostart_core::application::ComponentService;

use crate::{
    cli::{CreateCommands, GlobalArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %cmd.name()))]
pub fn execute(
    cmd: CreateCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let filesystem = commands::filesystem(&global.dir)?;
    let renderer = commands::renderer(&config, &global.dir)?;
    let service = ComponentService::new(
        Box::new(filesystem),
        Box::new(renderer),
        commands::formatter(&config),
        config.layout,
    );

    let report = match cmd.kind() {
        Some(kind) => {
            output.header(&format!("Creating {kind} '{}'", cmd.name()))?;
            service.create(kind, cmd.name())?
        }
        None => {
            output.header(&format!("Creating feature '{}'", cmd.name()))?;
            service.create_feature(cmd.name())?
        }
    };

    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "Create completed"
    );
    output.report(&report)?;
    Ok(())
}
