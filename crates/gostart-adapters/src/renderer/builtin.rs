//! Template renderer with embedded defaults and per-project overrides.
//!
//! Templates use the Go `text/template` field syntax for the three values in
//! [`TemplateData`]: `{{.ServiceName}}`, `{{.ServiceNameLower}}` and
//! `{{.ModuleName}}`. Nothing else is interpreted; a placeholder naming any
//! other field is a rendering error rather than silently left in the output.
//!
//! # Override directory
//!
//! ```text
//! my-templates/
//! ├── handler.tmpl        ← replaces the built-in handler template
//! └── gin/
//!     └── main.tmpl       ← nested directories are searched too
//! ```
//!
//! Files without the `.tmpl` extension are skipped. A `.tmpl` file whose
//! stem names no built-in template is an error, so a misspelt override
//! cannot silently fall back to the embedded source.

use std::collections::HashMap;
use std::path::Path;

use gostart_core::{
    application::{
        ApplicationError,
        ports::{TemplateData, TemplateName, TemplateRenderer},
    },
    error::GostartResult,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*\.([A-Za-z_]\w*)\s*\}\}").expect("placeholder pattern is valid")
});

/// Embedded template source for `name`.
pub fn embedded(name: TemplateName) -> &'static str {
    match name {
        TemplateName::Usecase => include_str!("../../templates/usecase.tmpl"),
        TemplateName::UsecaseInterface => include_str!("../../templates/usecase_interface.tmpl"),
        TemplateName::Repository => include_str!("../../templates/repository.tmpl"),
        TemplateName::RepositoryInterface => {
            include_str!("../../templates/repository_interface.tmpl")
        }
        TemplateName::Handler => include_str!("../../templates/handler.tmpl"),
        TemplateName::Main => include_str!("../../templates/main.tmpl"),
        TemplateName::Air => include_str!("../../templates/air.tmpl"),
        TemplateName::Database => include_str!("../../templates/database.tmpl"),
        TemplateName::Gitignore => include_str!("../../templates/gitignore.tmpl"),
        TemplateName::Readme => include_str!("../../templates/readme.tmpl"),
        TemplateName::Env => include_str!("../../templates/env.tmpl"),
        TemplateName::Config => include_str!("../../templates/config.tmpl"),
        TemplateName::Response => include_str!("../../templates/response.tmpl"),
        TemplateName::Request => include_str!("../../templates/request.tmpl"),
        TemplateName::Models => include_str!("../../templates/models.tmpl"),
        TemplateName::Dockerfile => include_str!("../../templates/dockerfile.tmpl"),
        TemplateName::DockerCompose => include_str!("../../templates/docker_compose.tmpl"),
    }
}

/// Renderer over the embedded templates, optionally shadowed by files from
/// an override directory.
#[derive(Debug, Clone, Default)]
pub struct BuiltinRenderer {
    overrides: HashMap<TemplateName, String>,
}

impl BuiltinRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `<template>.tmpl` found under `dir` as an override.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn with_override_dir(dir: impl AsRef<Path>) -> GostartResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: "templates directory does not exist".into(),
            }
            .into());
        }

        let mut overrides = HashMap::new();
        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().unwrap_or(dir).to_path_buf(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            let Some(stem) = file_name.strip_suffix(".tmpl") else {
                continue;
            };
            let Some(name) = TemplateName::from_file_name(&file_name) else {
                warn!(path = %entry.path().display(), "Override does not name a template");
                return Err(ApplicationError::TemplateNotFound {
                    name: stem.to_string(),
                }
                .into());
            };

            let source = std::fs::read_to_string(entry.path()).map_err(|e| {
                ApplicationError::FilesystemError {
                    path: entry.path().to_path_buf(),
                    reason: format!("Failed to read template: {e}"),
                }
            })?;
            debug!(template = %name, path = %entry.path().display(), "Template override");
            overrides.insert(name, source);
        }

        info!(count = overrides.len(), "Loaded template overrides");
        Ok(Self { overrides })
    }

    /// Names with an override in effect.
    pub fn overridden(&self) -> impl Iterator<Item = TemplateName> + '_ {
        self.overrides.keys().copied()
    }

    fn source(&self, name: TemplateName) -> &str {
        self.overrides
            .get(&name)
            .map(String::as_str)
            .unwrap_or_else(|| embedded(name))
    }
}

impl TemplateRenderer for BuiltinRenderer {
    fn render(&self, template: TemplateName, data: &TemplateData) -> GostartResult<String> {
        render_placeholders(self.source(template), data).map_err(|field| {
            ApplicationError::RenderingFailed {
                reason: format!("{template}.tmpl references unknown field .{field}"),
            }
            .into()
        })
    }
}

/// Substitute `{{.Field}}` placeholders. Returns the first unknown field
/// name on failure.
pub fn render_placeholders(source: &str, data: &TemplateData) -> Result<String, String> {
    let fields = data.fields();
    let mut unknown = None;

    let rendered = PLACEHOLDER.replace_all(source, |caps: &Captures<'_>| {
        let field = &caps[1];
        match fields.iter().find(|(key, _)| *key == field) {
            Some((_, value)) => (*value).to_string(),
            None => {
                unknown.get_or_insert_with(|| field.to_string());
                String::new()
            }
        }
    });

    match unknown {
        Some(field) => Err(field),
        None => Ok(rendered.into_owned()),
    }
}
