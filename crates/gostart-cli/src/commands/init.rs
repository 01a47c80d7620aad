//! `gostart init`: create the folder tree and starter files.

use tracing::instrument;

use gostart_core::application::ProjectService;

use crate::{
    cli::{GlobalArgs, InitArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let filesystem = commands::filesystem(&global.dir)?;
    let renderer = commands::renderer(&config, &global.dir)?;
    let service = ProjectService::new(Box::new(filesystem), Box::new(renderer), config.layout);

    output.header("Initialising project")?;
    let report = service.init(args.module.as_deref(), args.force)?;
    output.report(&report)?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  go mod tidy")?;
        output.print("  gostart create feature user")?;
        output.print("  air            # live reload, see .air.toml")?;
    }
    Ok(())
}
