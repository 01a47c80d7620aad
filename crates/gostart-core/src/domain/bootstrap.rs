//! The dependency bootstrap file and the lines a feature adds to it.
//!
//! The marker strings in [`Markers`] are the public contract of the
//! skeleton. A project can ship its own `bootstrap.go` as long as it keeps
//! these anchors; any anchor it drops simply stops receiving injections.

use crate::domain::{entry::Entry, kind::AggregatorKind, layout::ProjectLayout};

/// The six insertion anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub imports: &'static str,
    pub repositories: &'static str,
    pub usecases: &'static str,
    pub handlers: &'static str,
    pub struct_fields: &'static str,
    pub return_fields: &'static str,
}

impl Markers {
    pub const STANDARD: Markers = Markers {
        imports: "import (",
        repositories: "// Repositories",
        usecases: "// Usecases",
        handlers: "// Handlers",
        struct_fields: "type Dependencies struct {",
        return_fields: "return &Dependencies{",
    };

    pub fn all(&self) -> [&'static str; 6] {
        [
            self.imports,
            self.repositories,
            self.usecases,
            self.handlers,
            self.struct_fields,
            self.return_fields,
        ]
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::STANDARD
    }
}

const SKELETON: &str = r#"package bootstrap

import (
	"gorm.io/gorm"
)

type Dependencies struct {
	DB *gorm.DB
}

func InitDependencies() *Dependencies {
	db, err := database.ConnectDB()

	if err != nil {
		log.Fatal("Failed to connect to database:", err)
	}

	// Repositories

	// Usecases

	// Handlers

	return &Dependencies{
		DB: db,
	}
}
"#;

/// Initial content of the bootstrap file and the anchors it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSkeleton {
    pub text: &'static str,
    pub markers: Markers,
}

impl Default for BootstrapSkeleton {
    fn default() -> Self {
        Self {
            text: SKELETON,
            markers: Markers::STANDARD,
        }
    }
}

/// Which part of the bootstrap file an injection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiringSlot {
    Import,
    Repository,
    Usecase,
    Handler,
    StructField,
    ReturnField,
}

/// One line to insert after one marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub slot: WiringSlot,
    pub marker: &'static str,
    pub line: String,
}

/// Ordered injections for a single feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringPlan {
    injections: Vec<Injection>,
}

impl WiringPlan {
    pub fn for_feature(entry: &Entry, layout: &ProjectLayout, markers: &Markers) -> Self {
        let module = entry.module_path();
        let name = entry.name();
        let x = entry.display_name();

        let quoted = |path: String| format!("\"{path}\"");
        let imports = [
            quoted("log".to_string()),
            quoted(layout.import_path(module, &layout.database_dir)),
            quoted(layout.import_path(module, layout.dir_for(AggregatorKind::Repository))),
            quoted(layout.import_path(module, layout.dir_for(AggregatorKind::Handler))),
            quoted(layout.import_path(module, layout.dir_for(AggregatorKind::Usecase))),
        ];

        let mut injections: Vec<Injection> = imports
            .into_iter()
            .map(|line| Injection {
                slot: WiringSlot::Import,
                marker: markers.imports,
                line,
            })
            .collect();

        let mut push = |slot, marker, line: String| {
            injections.push(Injection { slot, marker, line })
        };
        push(
            WiringSlot::Repository,
            markers.repositories,
            format!("{name}Repo := repositories.New{x}Repository(db)"),
        );
        push(
            WiringSlot::Usecase,
            markers.usecases,
            format!("{name}Usecase := usecases.New{x}Usecase({name}Repo)"),
        );
        push(
            WiringSlot::Handler,
            markers.handlers,
            format!("{name}Handler := handler.New{x}Handler({name}Usecase)"),
        );
        push(
            WiringSlot::StructField,
            markers.struct_fields,
            format!("{x}Handler *handler.{x}Handler"),
        );
        push(
            WiringSlot::ReturnField,
            markers.return_fields,
            format!("{x}Handler: {name}Handler,"),
        );

        Self { injections }
    }

    pub fn injections(&self) -> &[Injection] {
        &self.injections
    }

    pub fn len(&self) -> usize {
        self.injections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.injections.is_empty()
    }
}
