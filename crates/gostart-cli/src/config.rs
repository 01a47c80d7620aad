//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ProjectLayout`]
//! carved out of it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `GOSTART__SECTION__KEY` (a `.env` file in the
//!    working directory is loaded first)
//! 3. `--config FILE`, or `gostart.toml` in the project root
//! 4. Global file under the platform config directory
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use gostart_adapters::GofmtFormatter;
use serde::{Deserialize, Serialize};

use gostart_core::domain::ProjectLayout;

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "gostart.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "GOSTART";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where components, aggregators and the bootstrap file live.
    pub layout: ProjectLayout,
    /// Formatting of regenerated aggregator files.
    pub formatter: FormatterConfig,
    /// Template overrides.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub enabled: bool,
    /// Command line reading Go source on stdin and writing it to stdout.
    pub command: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: GofmtFormatter::DEFAULT_COMMAND.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<template>.tmpl` overrides, relative to the project root.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering file and environment sources over the
    /// defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. When
    /// absent, `gostart.toml` in `project_dir` is used if present.
    pub fn load(config_file: Option<&Path>, project_dir: &Path) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to seed default configuration")?,
        );

        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.to_path_buf()).required(true)),
            None => builder
                .add_source(File::from(project_dir.join(LOCAL_CONFIG_FILE)).required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        let cfg: Self = config
            .try_deserialize()
            .context("Invalid configuration values")?;
        cfg.layout
            .validate()
            .context("Invalid [layout] configuration")?;
        Ok(cfg)
    }

    /// Per-user configuration file, if the platform has a config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "gostart", "gostart")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The file whose values are in effect, in the order [`Self::load`]
    /// consults them.
    pub fn active_path(config_file: Option<&Path>, project_dir: &Path) -> Option<PathBuf> {
        if let Some(path) = config_file {
            return Some(path.to_path_buf());
        }
        let local = project_dir.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::global_config_path().filter(|p| p.is_file())
    }

    /// Template override directory resolved against the project root.
    pub fn templates_dir(&self, project_dir: &Path) -> Option<PathBuf> {
        self.templates.dir.as_ref().map(|dir| project_dir.join(dir))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }

    /// Look up a dotted key such as `layout.usecases_dir`.
    pub fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut value =
            toml::Value::try_from(self).context("Failed to serialise configuration")?;
        for part in key.split('.') {
            match value {
                toml::Value::Table(mut table) => match table.remove(part) {
                    Some(next) => value = next,
                    None => return Ok(None),
                },
                _ => return Ok(None),
            }
        }
        Ok(Some(match value {
            toml::Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    /// Every leaf key, dotted.
    pub fn keys(&self) -> anyhow::Result<Vec<String>> {
        fn walk(prefix: &str, value: &toml::Value, out: &mut Vec<String>) {
            if let toml::Value::Table(table) = value {
                for (k, v) in table {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            } else {
                out.push(prefix.to_string());
            }
        }

        let value = toml::Value::try_from(self).context("Failed to serialise configuration")?;
        let mut keys = Vec::new();
        walk("", &value, &mut keys);
        Ok(keys)
    }
}
