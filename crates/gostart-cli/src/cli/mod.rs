//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use gostart_core::domain::AggregatorKind;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gostart",
    bin_name = "gostart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Clean architecture scaffolding for Go services",
    long_about = "gostart generates Go project skeletons and keeps the \
                  usecase, repository and handler aggregator packages and \
                  the dependency bootstrap in sync as components are added.",
    after_help = "EXAMPLES:\n\
        \x20 gostart init --module github.com/acme/shop\n\
        \x20 gostart create feature order\n\
        \x20 gostart create usecase payment\n\
        \x20 gostart docker shop\n\
        \x20 gostart completions bash > /usr/share/bash-completion/completions/gostart",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a component and register it in its aggregator.
    #[command(
        subcommand,
        visible_alias = "c",
        about = "Create a usecase, repository, handler or whole feature",
        after_help = "EXAMPLES:\n\
            \x20 gostart create usecase user\n\
            \x20 gostart create repository user\n\
            \x20 gostart create feature order"
    )]
    Create(CreateCommands),

    /// Initialise the project folder tree and starter files.
    #[command(
        about = "Initialise a Go project in the current directory",
        after_help = "EXAMPLES:\n\
            \x20 gostart init\n\
            \x20 gostart init --module github.com/acme/shop\n\
            \x20 gostart init --force   # re-render starter files"
    )]
    Init(InitArgs),

    /// Write a Dockerfile and docker-compose.yaml.
    #[command(
        about = "Generate Docker files",
        after_help = "EXAMPLES:\n\
            \x20 gostart docker\n\
            \x20 gostart docker shop"
    )]
    Docker(DockerArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gostart completions bash > ~/.local/share/bash-completion/completions/gostart\n\
            \x20 gostart completions zsh  > ~/.zfunc/_gostart\n\
            \x20 gostart completions fish > ~/.config/fish/completions/gostart.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the gostart configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gostart config list\n\
            \x20 gostart config get layout.usecases_dir\n\
            \x20 gostart config init"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Subcommands for `gostart create`.
#[derive(Debug, Subcommand)]
pub enum CreateCommands {
    /// Usecase package plus its `usecases.go` registration.
    #[command(visible_alias = "uc")]
    Usecase(ComponentArgs),
    /// Repository package plus its `repositories.go` registration.
    #[command(visible_alias = "repo")]
    Repository(ComponentArgs),
    /// Handler package plus its `handler.go` registration.
    Handler(ComponentArgs),
    /// Usecase, repository and handler, wired into the bootstrap file.
    Feature(ComponentArgs),
}

impl CreateCommands {
    /// Component kind, or `None` for a whole feature.
    pub fn kind(&self) -> Option<AggregatorKind> {
        match self {
            Self::Usecase(_) => Some(AggregatorKind::Usecase),
            Self::Repository(_) => Some(AggregatorKind::Repository),
            Self::Handler(_) => Some(AggregatorKind::Handler),
            Self::Feature(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Usecase(a) | Self::Repository(a) | Self::Handler(a) | Self::Feature(a) => {
                &a.name
            }
        }
    }
}

/// Arguments shared by every `create` subcommand.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    /// Component name, e.g. `user` or `order_item`. Case is normalised.
    #[arg(value_name = "NAME", help = "Component name")]
    pub name: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gostart init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Module path used in generated imports. Read from `go.mod` when omitted.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Go module path (defaults to the one in go.mod)"
    )]
    pub module: Option<String>,

    /// Re-render starter files that already exist.
    #[arg(short = 'f', long = "force", help = "Overwrite existing starter files")]
    pub force: bool,
}

// ── docker ────────────────────────────────────────────────────────────────────

/// Arguments for `gostart docker`.
#[derive(Debug, Args)]
pub struct DockerArgs {
    /// Compose service and image name.
    #[arg(value_name = "NAME", help = "Service name (default: app)")]
    pub name: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gostart completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gostart config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `formatter.command`.
        key: String,
    },
    /// Print all effective configuration values.
    List,
    /// Print the path of the configuration file in effect.
    Path,
    /// Write a configuration file with the default values.
    Init {
        /// Write the per-user file instead of `./gostart.toml`.
        #[arg(long = "global", help = "Create the global configuration file")]
        global: bool,

        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
