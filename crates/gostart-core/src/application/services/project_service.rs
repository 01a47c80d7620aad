//! `init` and `docker`: one-shot project files.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, TemplateData, TemplateName, TemplateRenderer},
        services::report::{GenerationReport, emit},
    },
    domain::{ProjectLayout, parse_module_name},
    error::GostartResult,
};

/// Module path written into templates when no manifest can be read.
pub const PLACEHOLDER_MODULE: &str = "your-project-name";

/// Service name used by `docker` without an argument.
pub const DEFAULT_SERVICE_NAME: &str = "app";

/// Project initialisation service.
pub struct ProjectService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    layout: ProjectLayout,
}

impl ProjectService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            layout,
        }
    }

    /// Directories created by `init`.
    pub fn folders(&self) -> Vec<PathBuf> {
        let l = &self.layout;
        vec![
            PathBuf::from("src/app/controllers"),
            l.usecases_dir.clone(),
            PathBuf::from("src/app/config"),
            PathBuf::from("src/infrastructure/middlewares"),
            l.database_dir.join("models"),
            l.repositories_dir.clone(),
            PathBuf::from("src/infrastructure/services"),
            l.handlers_dir.clone(),
            PathBuf::from("src/interface/request"),
            PathBuf::from("src/interface/response"),
        ]
    }

    /// Files rendered by `init`, in write order.
    pub fn project_files(&self) -> Vec<(PathBuf, TemplateName)> {
        let db = &self.layout.database_dir;
        vec![
            (PathBuf::from("src/cmd/main.go"), TemplateName::Main),
            (PathBuf::from(".air.toml"), TemplateName::Air),
            (db.join("db.go"), TemplateName::Database),
            (PathBuf::from(".gitignore"), TemplateName::Gitignore),
            (PathBuf::from("README.md"), TemplateName::Readme),
            (PathBuf::from(".env.example"), TemplateName::Env),
            (PathBuf::from("src/app/config/config.go"), TemplateName::Config),
            (PathBuf::from("src/interface/response/response.go"), TemplateName::Response),
            (PathBuf::from("src/interface/request/request.go"), TemplateName::Request),
            (db.join("models").join("user.go"), TemplateName::Models),
        ]
    }

    /// Module path for templates: the override, then the manifest, then
    /// [`PLACEHOLDER_MODULE`].
    pub fn resolve_module(&self, module_override: Option<&str>) -> GostartResult<String> {
        if let Some(module) = module_override.map(str::trim).filter(|m| !m.is_empty()) {
            return Ok(module.to_string());
        }

        let manifest = &self.layout.manifest;
        match self.filesystem.read_file(manifest)?.as_deref().and_then(parse_module_name) {
            Some(module) => Ok(module),
            None => {
                warn!(
                    manifest = %manifest.display(),
                    "Could not read module name, using placeholder"
                );
                Ok(PLACEHOLDER_MODULE.to_string())
            }
        }
    }

    /// Create the folder tree and project files. Existing files are kept
    /// unless `force` is set.
    #[instrument(skip(self))]
    pub fn init(&self, module_override: Option<&str>, force: bool) -> GostartResult<GenerationReport> {
        self.layout.validate()?;
        let mut report = GenerationReport::default();

        for dir in self.folders() {
            if !self.filesystem.exists(&dir) {
                self.filesystem.create_dir_all(&dir)?;
                report.directories.push(dir);
            }
        }

        let module = self.resolve_module(module_override)?;
        info!(%module, "Initializing project");
        let data = TemplateData::for_project(module);

        for (path, template) in self.project_files() {
            emit(
                self.filesystem.as_ref(),
                self.renderer.as_ref(),
                path,
                template,
                &data,
                force,
                &mut report,
            )?;
        }

        Ok(report)
    }

    /// Render `Dockerfile` and `docker-compose.yaml`, replacing existing ones.
    #[instrument(skip(self))]
    pub fn docker(&self, service_name: Option<&str>) -> GostartResult<GenerationReport> {
        let service = service_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SERVICE_NAME);
        let data = TemplateData::for_service(service);
        let mut report = GenerationReport::default();

        for (path, template) in [
            ("Dockerfile", TemplateName::Dockerfile),
            ("docker-compose.yaml", TemplateName::DockerCompose),
        ] {
            emit(
                self.filesystem.as_ref(),
                self.renderer.as_ref(),
                PathBuf::from(path),
                template,
                &data,
                true,
                &mut report,
            )?;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateRenderer};

    fn recording_renderer() -> (Box<MockTemplateRenderer>, Arc<Mutex<Vec<TemplateData>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(move |template, data| {
            sink.lock().unwrap().push(data.clone());
            Ok(format!("{template}\n"))
        });
        (Box::new(renderer), seen)
    }

    #[test]
    fn init_creates_tree_and_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(10).returning(|_| Ok(()));
        fs.expect_read_file()
            .returning(|_| Ok(Some("module example.com/app\n".into())));
        fs.expect_write_file().times(10).returning(|_, _| Ok(()));

        let (renderer, seen) = recording_renderer();
        let service = ProjectService::new(Box::new(fs), renderer, ProjectLayout::default());
        let report = service.init(None, false).unwrap();

        assert_eq!(report.directories.len(), 10);
        assert!(
            report
                .written
                .contains(&PathBuf::from("src/infrastructure/database/models/user.go"))
        );
        assert!(
            seen.lock()
                .unwrap()
                .iter()
                .all(|d| d.module_name == "example.com/app")
        );
    }

    #[test]
    fn init_falls_back_to_placeholder_module() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|_| Ok(None));
        let service = ProjectService::new(
            Box::new(fs),
            Box::new(MockTemplateRenderer::new()),
            ProjectLayout::default(),
        );
        assert_eq!(service.resolve_module(None).unwrap(), PLACEHOLDER_MODULE);
        assert_eq!(service.resolve_module(Some(" acme/x ")).unwrap(), "acme/x");
    }

    #[test]
    fn init_keeps_existing_files_without_force() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().never();
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_write_file().never();

        let service = ProjectService::new(
            Box::new(fs),
            Box::new(MockTemplateRenderer::new()),
            ProjectLayout::default(),
        );
        let report = service.init(None, false).unwrap();
        assert_eq!(report.skipped.len(), 10);
        assert!(report.is_noop());
    }

    #[test]
    fn docker_defaults_service_name() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let (renderer, seen) = recording_renderer();
        let service = ProjectService::new(Box::new(fs), renderer, ProjectLayout::default());
        let report = service.docker(None).unwrap();

        assert_eq!(
            report.written,
            [PathBuf::from("Dockerfile"), PathBuf::from("docker-compose.yaml")]
        );
        assert!(seen.lock().unwrap().iter().all(|d| d.service_name == "app"));
    }

    #[test]
    fn docker_lowercases_service_name() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|_, _| Ok(()));

        let (renderer, seen) = recording_renderer();
        let service = ProjectService::new(Box::new(fs), renderer, ProjectLayout::default());
        service.docker(Some("Billing")).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].service_name, "Billing");
        assert_eq!(seen[0].service_name_lower, "billing");
    }
}
