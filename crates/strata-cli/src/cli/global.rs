//! Flags shared by every `strata` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what the scaffolder does.
    ///
    /// `-v` reports each layer and file written, `-vv` each registry edit
    /// and whether it was already present, `-vvv` everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log progress (-v), registry edits (-vv), everything (-vvv)",
        long_help = "Log more of what strata does on stderr:
    (none)  skipped edits and failures only
    -v      each layer, file written and registry updated
    -vv     every registry edit and its outcome
    -vvv    lock, module-root and config resolution details"
    )]
    pub verbose: u8,

    /// Print only errors and skipped-edit warnings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and skipped edits"
    )]
    pub quiet: bool,

    /// Never colour the report. `NO_COLOR` in the environment sets it too.
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    /// TOML file to read instead of the platform default.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE (must exist)"
    )]
    pub config: Option<PathBuf>,

    /// How the scaffold report is printed. Overrides `output.format`.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Report format (default: output.format from config, then auto)"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of the scaffold report on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured status lines per file and registry.
    Human,
    /// The same lines without ANSI codes.
    Plain,
    /// The whole report as one JSON document, printed even with `--quiet`.
    Json,
}
