//! `gostart config`: inspect and create configuration files.

use std::path::Path;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.data(config.to_toml().map_err(CliError::config)?.trim_end())?;
        }

        ConfigCommands::Path => {
            match AppConfig::active_path(global.config.as_deref(), &global.dir) {
                Some(path) => output.data(&path.display().to_string())?,
                None => output.info("No configuration file found, using built-in defaults")?,
            }
        }

        ConfigCommands::Init { global: to_global, force } => {
            let path = if to_global {
                AppConfig::global_config_path().ok_or_else(|| CliError::ConfigError {
                    message: "No config directory available on this platform".into(),
                    source: None,
                })?
            } else {
                global.dir.join(LOCAL_CONFIG_FILE)
            };
            write_default_config(&path, force, &output)?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config
        .get(key)
        .map_err(CliError::config)?
        .ok_or_else(|| CliError::UnknownConfigKey {
            key: key.to_string(),
            available: config.keys().unwrap_or_default(),
        })
}

fn write_default_config(path: &Path, force: bool, output: &OutputManager) -> CliResult<()> {
    if path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    let toml = AppConfig::default().to_toml().map_err(CliError::config)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })?;

    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
