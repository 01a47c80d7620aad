//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use gostart_core::application::{FormatOutcome, GenerationReport, SyncOutcome, WiringReport};

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is off when stdout is piped or redirected.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Data written for machines (`config get`, completions); never
    /// suppressed.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Print everything a generation command touched.
    pub fn report(&self, report: &GenerationReport) -> io::Result<()> {
        for dir in &report.directories {
            self.success(&format!("created {}/", dir.display()))?;
        }
        for file in &report.written {
            self.success(&format!("created {}", file.display()))?;
        }
        for file in &report.skipped {
            self.info(&format!("kept {} (already exists)", file.display()))?;
        }
        for (kind, outcome) in &report.synced {
            self.sync_outcome(&format!("{kind} aggregator"), outcome)?;
        }
        if let Some(wiring) = &report.wiring {
            self.wiring(wiring)?;
        }
        if report.is_noop() {
            self.info("Nothing to do, everything is already in place")?;
        }
        Ok(())
    }

    fn sync_outcome(&self, label: &str, outcome: &SyncOutcome) -> io::Result<()> {
        match outcome {
            SyncOutcome::Created { path, format } => {
                self.success(&format!("created {label} {}", path.display()))?;
                self.format_warning(path.display(), format)
            }
            SyncOutcome::Updated {
                path,
                entries,
                format,
            } => {
                self.success(&format!(
                    "updated {label} {} ({entries} entries)",
                    path.display()
                ))?;
                self.format_warning(path.display(), format)
            }
            SyncOutcome::Unchanged { path } => {
                self.info(&format!("{label} {} already up to date", path.display()))
            }
        }
    }

    fn format_warning(
        &self,
        path: impl std::fmt::Display,
        format: &FormatOutcome,
    ) -> io::Result<()> {
        match format {
            FormatOutcome::Formatted(_) => Ok(()),
            FormatOutcome::Unformatted { reason, .. } => {
                self.warning(&format!("{path} was written unformatted: {reason}"))
            }
        }
    }

    fn wiring(&self, wiring: &WiringReport) -> io::Result<()> {
        let path = wiring.path.display();
        if wiring.seeded {
            self.success(&format!("created {path} from the bootstrap skeleton"))?;
        }
        if !wiring.inserted.is_empty() {
            self.success(&format!(
                "wired {} lines into {path}",
                wiring.inserted.len()
            ))?;
        }
        if wiring.already_present > 0 {
            self.info(&format!(
                "{} lines already present in {path}",
                wiring.already_present
            ))?;
        }
        for marker in &wiring.not_applicable {
            self.warning(&format!("marker `{marker}` not found in {path}, line skipped"))?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
