//! Diagnostics on stderr.
//!
//! The scaffold report goes to stdout through [`crate::output`]; everything
//! emitted with `tracing` by the three strata crates lands here instead, so
//! `--output-format json` stays parseable at any verbosity.
//!
//! `-q` keeps errors only, the default adds the warnings for skipped
//! registry edits, and each `-v` goes one level further. `RUST_LOG`, when
//! set, replaces the computed filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

const STRATA_TARGETS: [&str; 3] = ["strata", "strata_core", "strata_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(strata_directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// `strata=<level>,strata_core=<level>,...`; dependencies stay silent.
fn strata_directives(level: LevelFilter) -> String {
    STRATA_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
