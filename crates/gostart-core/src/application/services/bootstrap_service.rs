//! Wire a feature into the dependency bootstrap file.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ports::Filesystem, services::report::WiringReport},
    domain::{BootstrapSkeleton, Entry, ProjectLayout, Splice, WiringPlan, contains_line, splice_after_marker},
    error::GostartResult,
};

/// Applies a [`WiringPlan`] to the bootstrap file.
pub struct BootstrapWiring<'a> {
    filesystem: &'a dyn Filesystem,
    layout: &'a ProjectLayout,
    skeleton: &'a BootstrapSkeleton,
}

impl<'a> BootstrapWiring<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        layout: &'a ProjectLayout,
        skeleton: &'a BootstrapSkeleton,
    ) -> Self {
        Self {
            filesystem,
            layout,
            skeleton,
        }
    }

    /// Seed the bootstrap file if absent, then insert each planned line that
    /// is not already there. The file is written at most once, and not at all
    /// when nothing changed.
    #[instrument(skip_all, fields(feature = entry.name()))]
    pub fn wire(&self, entry: &Entry) -> GostartResult<WiringReport> {
        let path = self.layout.bootstrap_file.clone();

        let (mut text, seeded) = match self.filesystem.read_file(&path)? {
            Some(text) => (text, false),
            None => {
                info!(path = %path.display(), "Seeding bootstrap file");
                (self.skeleton.text.to_string(), true)
            }
        };

        let plan = WiringPlan::for_feature(entry, self.layout, &self.skeleton.markers);
        let mut report = WiringReport {
            path,
            seeded,
            ..WiringReport::default()
        };

        for injection in plan.injections() {
            if contains_line(&text, &injection.line) {
                debug!(line = %injection.line, "Already wired");
                report.already_present += 1;
                continue;
            }

            match splice_after_marker(&text, injection.marker, &injection.line) {
                Splice::Spliced(spliced) => {
                    text = spliced;
                    report.inserted.push(injection.line.clone());
                }
                Splice::MarkerNotFound => {
                    warn!(marker = injection.marker, "Marker not found in bootstrap file, skipping");
                    report.not_applicable.push(injection.marker);
                }
            }
        }

        if report.wrote() {
            self.filesystem.write_file(&report.path, &text)?;
            info!(
                path = %report.path.display(),
                inserted = report.inserted.len(),
                "Updated bootstrap file"
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::MockFilesystem;

    const MODULE: &str = "github.com/acme/shop";

    /// Mock filesystem backed by a single shared file slot.
    fn fs_with(initial: Option<String>) -> (MockFilesystem, Arc<Mutex<Option<String>>>) {
        let slot = Arc::new(Mutex::new(initial));
        let mut fs = MockFilesystem::new();

        let read = Arc::clone(&slot);
        fs.expect_read_file()
            .returning(move |_| Ok(read.lock().unwrap().clone()));

        let write = Arc::clone(&slot);
        fs.expect_write_file().returning(move |_, content| {
            *write.lock().unwrap() = Some(content.to_string());
            Ok(())
        });

        (fs, slot)
    }

    #[test]
    fn seeds_skeleton_and_wires_feature() {
        let (fs, slot) = fs_with(None);
        let layout = ProjectLayout::default();
        let skeleton = BootstrapSkeleton::default();

        let report = BootstrapWiring::new(&fs, &layout, &skeleton)
            .wire(&Entry::new("user", MODULE))
            .unwrap();
        assert!(report.seeded);
        assert_eq!(report.inserted.len(), 10);
        assert!(report.not_applicable.is_empty());

        let text = slot.lock().unwrap().clone().unwrap();
        assert!(text.contains("\t// Repositories\n\tuserRepo := repositories.NewUserRepository(db)\n"));
        assert!(text.contains("\t// Usecases\n\tuserUsecase := usecases.NewUserUsecase(userRepo)\n"));
        assert!(text.contains("\t// Handlers\n\tuserHandler := handler.NewUserHandler(userUsecase)\n"));
        assert!(text.contains("type Dependencies struct {\n\tUserHandler *handler.UserHandler\n"));
        assert!(text.contains("return &Dependencies{\n\t\tUserHandler: userHandler,\n"));
        assert!(text.contains("\t\"github.com/acme/shop/src/app/usecases\"\n"));
        assert_eq!(text.matches("// Repositories").count(), 1);
    }

    #[test]
    fn second_feature_reuses_imports() {
        let (fs, slot) = fs_with(None);
        let layout = ProjectLayout::default();
        let skeleton = BootstrapSkeleton::default();
        let wiring = BootstrapWiring::new(&fs, &layout, &skeleton);

        wiring.wire(&Entry::new("user", MODULE)).unwrap();
        let report = wiring.wire(&Entry::new("task", MODULE)).unwrap();

        assert!(!report.seeded);
        assert_eq!(report.already_present, 5);
        assert_eq!(report.inserted.len(), 5);

        let text = slot.lock().unwrap().clone().unwrap();
        assert_eq!(text.matches("\"log\"").count(), 1);
        assert!(text.contains("taskRepo := repositories.NewTaskRepository(db)"));
        assert!(text.contains("userRepo := repositories.NewUserRepository(db)"));
    }

    #[test]
    fn rewiring_is_a_noop() {
        let (fs, slot) = fs_with(None);
        let layout = ProjectLayout::default();
        let skeleton = BootstrapSkeleton::default();
        let wiring = BootstrapWiring::new(&fs, &layout, &skeleton);

        wiring.wire(&Entry::new("user", MODULE)).unwrap();
        let before = slot.lock().unwrap().clone();

        let report = wiring.wire(&Entry::new("user", MODULE)).unwrap();
        assert!(!report.wrote());
        assert_eq!(report.already_present, 10);
        assert_eq!(*slot.lock().unwrap(), before);
    }

    #[test]
    fn annotated_lines_are_not_wired_twice() {
        let (fs, slot) = fs_with(None);
        let layout = ProjectLayout::default();
        let skeleton = BootstrapSkeleton::default();
        let wiring = BootstrapWiring::new(&fs, &layout, &skeleton);

        wiring.wire(&Entry::new("user", MODULE)).unwrap();
        let annotated = slot.lock().unwrap().clone().unwrap().replace(
            "userRepo := repositories.NewUserRepository(db)\n",
            "userRepo := repositories.NewUserRepository(db) // primary store\n",
        );
        *slot.lock().unwrap() = Some(annotated.clone());

        let report = wiring.wire(&Entry::new("user", MODULE)).unwrap();
        assert!(report.inserted.is_empty());
        assert_eq!(report.already_present, 10);

        let text = slot.lock().unwrap().clone().unwrap();
        assert_eq!(text, annotated);
        assert_eq!(text.matches("userRepo :=").count(), 1);
    }

    #[test]
    fn missing_markers_are_not_applicable() {
        let custom = "package bootstrap\n\nimport (\n\t\"fmt\"\n)\n\nfunc Init() {\n\t// Repositories\n\tfmt.Println()\n}\n";
        let (fs, slot) = fs_with(Some(custom.to_string()));
        let layout = ProjectLayout::default();
        let skeleton = BootstrapSkeleton::default();

        let report = BootstrapWiring::new(&fs, &layout, &skeleton)
            .wire(&Entry::new("user", MODULE))
            .unwrap();
        assert_eq!(report.inserted.len(), 6);
        assert_eq!(
            report.not_applicable,
            [
                "// Usecases",
                "// Handlers",
                "type Dependencies struct {",
                "return &Dependencies{",
            ]
        );

        let text = slot.lock().unwrap().clone().unwrap();
        assert!(text.contains(
            "\t// Repositories\n\tuserRepo := repositories.NewUserRepository(db)\n\tfmt.Println()\n"
        ));
    }

    #[test]
    fn unchanged_file_without_markers_is_not_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(|_| Ok(Some("package bootstrap\n".to_string())));
        fs.expect_write_file().never();

        let layout = ProjectLayout::default();
        let skeleton = BootstrapSkeleton::default();
        let report = BootstrapWiring::new(&fs, &layout, &skeleton)
            .wire(&Entry::new("user", MODULE))
            .unwrap();
        assert_eq!(report.not_applicable.len(), 10);
        assert!(!report.wrote());
    }
}
