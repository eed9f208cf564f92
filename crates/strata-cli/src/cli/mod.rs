//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered CRUD scaffolding for Go Fiber + GORM services",
    long_about = "Strata generates the model, repository, service and handler \
                  files for a resource and wires them into the project's \
                  registries and migration list.",
    after_help = "EXAMPLES:\n\
        \x20 strata model order\n\
        \x20 strata model userProfile --module github.com/acme/shop\n\
        \x20 strata handler invoice -C ../billing --dry-run\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
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
    /// Generate every layer for a resource.
    #[command(
        visible_alias = "m",
        about = "Generate model, repository, service and handler",
        after_help = "EXAMPLES:\n\
            \x20 strata model order\n\
            \x20 strata m orderItem --dry-run"
    )]
    Model(GenerateArgs),

    /// Generate the repository layer only.
    #[command(
        about = "Generate repository interface and implementation",
        after_help = "EXAMPLES:\n\
            \x20 strata repository order"
    )]
    Repository(GenerateArgs),

    /// Generate the service layer only.
    #[command(
        about = "Generate service interface and implementation",
        after_help = "EXAMPLES:\n\
            \x20 strata service order"
    )]
    Service(GenerateArgs),

    /// Generate the HTTP handler only.
    #[command(
        about = "Generate the HTTP handler",
        after_help = "EXAMPLES:\n\
            \x20 strata handler order"
    )]
    Handler(GenerateArgs),

    /// Initialise a Strata configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 strata init\n\
            \x20 strata init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Strata configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get defaults.module\n\
            \x20 strata config list\n\
            \x20 strata config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments shared by `model`, `repository`, `service` and `handler`.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Resource name, e.g. `order` or `userProfile`.
    #[arg(value_name = "NAME", help = "Resource name (e.g. order, userProfile)")]
    pub name: String,

    /// Go module path used for generated imports.
    #[arg(
        long = "module",
        value_name = "MODULE",
        help = "Module root for imports (default: go.mod, then directory name)"
    )]
    pub module: Option<String>,

    /// Root of the Go project.
    #[arg(
        short = 'C',
        long = "project-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub project_dir: PathBuf,

    /// Report what would change without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
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

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.module`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
