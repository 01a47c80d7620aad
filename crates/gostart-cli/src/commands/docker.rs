//! `gostart docker`: write a Dockerfile and docker-compose.yaml.

use tracing::instrument;

use gostart_core::application::ProjectService;

use crate::{
    cli::{DockerArgs, GlobalArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: DockerArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let filesystem = commands::filesystem(&global.dir)?;
    let renderer = commands::renderer(&config, &global.dir)?;
    let service = ProjectService::new(Box::new(filesystem), Box::new(renderer), config.layout);

    let report = service.docker(args.name.as_deref())?;
    output.report(&report)?;
    Ok(())
}
