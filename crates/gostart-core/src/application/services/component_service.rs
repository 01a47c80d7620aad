//! `create usecase|repository|handler|feature`.
//!
//! Renders a component's own files, then registers it in the aggregator of
//! its kind. A feature does all three kinds and wires them into the
//! bootstrap file.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, SourceFormatter, TemplateData, TemplateName, TemplateRenderer},
        services::{
            AggregatorSync, BootstrapWiring,
            report::{GenerationReport, emit},
        },
    },
    domain::{
        AggregatorKind, BootstrapSkeleton, DomainError, Entry, ProjectLayout,
        normalize_component_name, parse_module_name,
    },
    error::GostartResult,
};

/// Templates rendered into a component directory, with their file names.
pub fn component_files(kind: AggregatorKind, name: &str) -> Vec<(TemplateName, String)> {
    match kind {
        AggregatorKind::Usecase => vec![
            (TemplateName::Usecase, format!("{name}_usecase.go")),
            (TemplateName::UsecaseInterface, "interface.go".to_string()),
        ],
        AggregatorKind::Repository => vec![
            (TemplateName::Repository, format!("{name}_repository.go")),
            (TemplateName::RepositoryInterface, "interface.go".to_string()),
        ],
        AggregatorKind::Handler => vec![(TemplateName::Handler, format!("{name}_handler.go"))],
    }
}

/// Component generation service.
pub struct ComponentService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    formatter: Box<dyn SourceFormatter>,
    layout: ProjectLayout,
    skeleton: BootstrapSkeleton,
}

impl ComponentService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        formatter: Box<dyn SourceFormatter>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            formatter,
            layout,
            skeleton: BootstrapSkeleton::default(),
        }
    }

    /// Replace the skeleton seeded into a missing bootstrap file.
    pub fn with_skeleton(mut self, skeleton: BootstrapSkeleton) -> Self {
        self.skeleton = skeleton;
        self
    }

    /// Module path from the manifest. Missing manifest or missing `module`
    /// line are both fatal here.
    pub fn module_name(&self) -> GostartResult<String> {
        let manifest = &self.layout.manifest;
        self.filesystem
            .read_file(manifest)?
            .as_deref()
            .and_then(parse_module_name)
            .ok_or_else(|| {
                DomainError::ModuleNameNotFound {
                    manifest: manifest.display().to_string(),
                }
                .into()
            })
    }

    /// Generate one component and register it.
    #[instrument(skip(self))]
    pub fn create(&self, kind: AggregatorKind, raw_name: &str) -> GostartResult<GenerationReport> {
        let entry = self.resolve_entry(raw_name)?;
        self.create_entry(kind, &entry)
    }

    /// Generate usecase, repository and handler for one name and wire them
    /// into the bootstrap file.
    #[instrument(skip(self))]
    pub fn create_feature(&self, raw_name: &str) -> GostartResult<GenerationReport> {
        let entry = self.resolve_entry(raw_name)?;
        info!(feature = entry.name(), "Generating feature");

        let mut report = GenerationReport::default();
        for kind in AggregatorKind::ALL {
            report.merge(self.create_entry(kind, &entry)?);
        }

        let wiring = BootstrapWiring::new(self.filesystem.as_ref(), &self.layout, &self.skeleton)
            .wire(&entry)?;
        report.wiring = Some(wiring);
        Ok(report)
    }

    fn resolve_entry(&self, raw_name: &str) -> GostartResult<Entry> {
        self.layout.validate()?;
        // Name first: a bad name is reported even outside a Go project.
        let name = normalize_component_name(raw_name)?;
        let module = self.module_name()?;
        Ok(Entry::new(name, module))
    }

    fn create_entry(&self, kind: AggregatorKind, entry: &Entry) -> GostartResult<GenerationReport> {
        let mut report = GenerationReport::default();
        let dir: PathBuf = self.layout.component_dir(kind, entry.name());
        let data = TemplateData::for_component(entry);

        for (template, file_name) in component_files(kind, entry.name()) {
            emit(
                self.filesystem.as_ref(),
                self.renderer.as_ref(),
                dir.join(file_name),
                template,
                &data,
                false,
                &mut report,
            )?;
        }

        let outcome = AggregatorSync::new(
            self.filesystem.as_ref(),
            self.formatter.as_ref(),
            &self.layout,
        )
        .sync(entry, kind)?;
        report.synced.push((kind, outcome));
        Ok(report)
    }
}
