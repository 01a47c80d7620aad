//! Keep one aggregator file in step with the generated components.
//!
//! State machine per call:
//!
//! ```text
//!   absent ──────────────▶ render {entry} ─▶ format? ─▶ write   (Created)
//!   present ─▶ parse ─┬──▶ entry complete ────────────▶ no-op  (Unchanged)
//!                     └──▶ parsed ∪ {entry} ─▶ render ─▶ format? ─▶ write (Updated)
//! ```
//!
//! The new text is computed in full before the single write, so a failure
//! never leaves a half-patched aggregator behind.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, SourceFormatter, format_or_fallback},
        services::report::SyncOutcome,
    },
    domain::{AggregatorKind, AggregatorParser, Entry, EntrySet, ProjectLayout, render_aggregator},
    error::GostartResult,
};

/// Aggregator maintenance over borrowed ports.
pub struct AggregatorSync<'a> {
    filesystem: &'a dyn Filesystem,
    formatter: &'a dyn SourceFormatter,
    layout: &'a ProjectLayout,
}

impl<'a> AggregatorSync<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        formatter: &'a dyn SourceFormatter,
        layout: &'a ProjectLayout,
    ) -> Self {
        Self {
            filesystem,
            formatter,
            layout,
        }
    }

    /// Register `entry` in the aggregator of `kind`.
    ///
    /// Re-running for an entry whose import, alias and binding are all
    /// present is a no-op. An entry present in only some blocks (a prior
    /// run interrupted half-way, or a file from an older generator) is
    /// treated as missing and the file is regenerated.
    #[instrument(skip_all, fields(kind = %kind, entry = entry.name()))]
    pub fn sync(&self, entry: &Entry, kind: AggregatorKind) -> GostartResult<SyncOutcome> {
        let path = self.layout.aggregator_path(kind);
        let import_root = self.layout.import_root(kind);

        let Some(existing) = self.filesystem.read_file(&path)? else {
            let mut entries = EntrySet::new();
            entries.insert(entry.clone());

            let format = format_or_fallback(
                self.formatter,
                render_aggregator(&entries, kind, &import_root),
            );
            self.filesystem.write_file(&path, format.text())?;
            info!(path = %path.display(), "Created aggregator");
            return Ok(SyncOutcome::Created { path, format });
        };

        let parser = AggregatorParser::new(kind, entry.module_path(), &import_root);
        let parsed = parser.parse(&existing);
        if parsed.is_complete(entry) {
            debug!(path = %path.display(), "Entry already registered");
            return Ok(SyncOutcome::Unchanged { path });
        }

        let mut entries = parsed.entries();
        entries.insert(entry.clone());
        let count = entries.len();

        let format = format_or_fallback(
            self.formatter,
            render_aggregator(&entries, kind, &import_root),
        );
        if format.text() == existing {
            return Ok(SyncOutcome::Unchanged { path });
        }

        self.filesystem.write_file(&path, format.text())?;
        info!(path = %path.display(), entries = count, "Updated aggregator");
        Ok(SyncOutcome::Updated {
            path,
            entries: count,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::application::ports::{FormatError, MockFilesystem, MockSourceFormatter};
    use crate::error::GostartError;

    const MODULE: &str = "github.com/acme/shop";

    fn identity_formatter() -> MockSourceFormatter {
        let mut formatter = MockSourceFormatter::new();
        formatter.expect_format().returning(|s| Ok(s.to_string()));
        formatter
    }

    fn usecases_path() -> PathBuf {
        PathBuf::from("src/app/usecases/usecases.go")
    }

    #[test]
    fn absent_file_is_seeded_with_one_entry() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("src/app/usecases/usecases.go")
                    && content.contains("NewUserUsecase = user.NewUserUsecase")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let formatter = identity_formatter();
        let layout = ProjectLayout::default();
        let sync = AggregatorSync::new(&fs, &formatter, &layout);

        let outcome = sync
            .sync(&Entry::new("user", MODULE), AggregatorKind::Usecase)
            .unwrap();
        assert!(matches!(outcome, SyncOutcome::Created { .. }));
        assert_eq!(outcome.path(), usecases_path());
        assert_eq!(outcome.formatted(), Some(true));
    }

    #[test]
    fn complete_entry_short_circuits_without_write() {
        let layout = ProjectLayout::default();
        let mut entries = EntrySet::new();
        entries.insert(Entry::new("user", MODULE));
        let text = render_aggregator(&entries, AggregatorKind::Usecase, "src/app/usecases");

        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(move |_| Ok(Some(text.clone())));
        fs.expect_write_file().never();

        let mut formatter = MockSourceFormatter::new();
        formatter.expect_format().never();

        let sync = AggregatorSync::new(&fs, &formatter, &layout);
        let outcome = sync
            .sync(&Entry::new("user", MODULE), AggregatorKind::Usecase)
            .unwrap();
        assert_eq!(outcome, SyncOutcome::Unchanged { path: usecases_path() });
    }

    #[test]
    fn binding_only_entry_is_healed() {
        let legacy = format!(
            "package usecases\n\nimport \"{MODULE}/src/app/usecases/user\"\n\n\
             var (\n\tNewUserUsecase = user.NewUserUsecase\n)\n"
        );

        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(move |_| Ok(Some(legacy.clone())));
        fs.expect_write_file()
            .withf(|_, content| content.contains("\tUserUsecase = user.UserUsecase\n"))
            .times(1)
            .returning(|_, _| Ok(()));

        let formatter = identity_formatter();
        let layout = ProjectLayout::default();
        let sync = AggregatorSync::new(&fs, &formatter, &layout);

        let outcome = sync
            .sync(&Entry::new("user", MODULE), AggregatorKind::Usecase)
            .unwrap();
        assert!(matches!(outcome, SyncOutcome::Updated { entries: 1, .. }));
    }

    #[test]
    fn commented_entry_survives_regeneration() {
        let annotated = format!(
            "package usecases\n\nimport (\n\t\"{MODULE}/src/app/usecases/user\" // accounts\n)\n\n\
             type (\n\tUserUsecase = user.UserUsecase // public API\n)\n\n\
             var (\n\tNewUserUsecase = user.NewUserUsecase // used by bootstrap\n)\n"
        );

        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(move |_| Ok(Some(annotated.clone())));
        fs.expect_write_file()
            .withf(|_, content| {
                content.contains("\tNewTaskUsecase = task.NewTaskUsecase\n")
                    && content.contains("\tNewUserUsecase = user.NewUserUsecase\n")
                    && content.contains("\tUserUsecase = user.UserUsecase\n")
                    && content.contains("/src/app/usecases/user\"\n")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let formatter = identity_formatter();
        let layout = ProjectLayout::default();
        let sync = AggregatorSync::new(&fs, &formatter, &layout);

        let outcome = sync
            .sync(&Entry::new("task", MODULE), AggregatorKind::Usecase)
            .unwrap();
        assert!(matches!(outcome, SyncOutcome::Updated { entries: 2, .. }));
    }

    #[test]
    fn formatter_failure_still_writes_raw_text() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_write_file()
            .withf(|_, content| content.starts_with("package repositories\n"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut formatter = MockSourceFormatter::new();
        formatter.expect_format().returning(|_| {
            Err(FormatError::Unavailable {
                command: "gofmt".into(),
                reason: "not found".into(),
            })
        });

        let layout = ProjectLayout::default();
        let sync = AggregatorSync::new(&fs, &formatter, &layout);
        let outcome = sync
            .sync(&Entry::new("task", MODULE), AggregatorKind::Repository)
            .unwrap();
        assert_eq!(outcome.formatted(), Some(false));
        assert!(outcome.wrote());
    }

    #[test]
    fn write_failure_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_write_file()
            .returning(|path, _| Err(GostartError::filesystem(path, "read-only")));

        let formatter = identity_formatter();
        let layout = ProjectLayout::default();
        let sync = AggregatorSync::new(&fs, &formatter, &layout);

        let err = sync
            .sync(&Entry::new("task", MODULE), AggregatorKind::Handler)
            .unwrap_err();
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn read_failure_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(|path| Err(GostartError::filesystem(path, "permission denied")));
        fs.expect_write_file().never();

        let formatter = identity_formatter();
        let layout = ProjectLayout::default();
        let sync = AggregatorSync::new(&fs, &formatter, &layout);

        assert!(
            sync.sync(&Entry::new("task", MODULE), AggregatorKind::Usecase)
                .is_err()
        );
    }
}
