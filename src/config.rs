// src/config.rs
use std::io::IsTerminal;

use anyhow::{Context, anyhow};
use inspect_engine::options::OutputFormat;
use log::LevelFilter;

use crate::cli::{Args, ColorChoice};
pub use inspect_engine::config::{Config, ConfigBuilder};

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let target = args
            .target()
            .ok_or_else(|| anyhow!("No operation specified. Use -i or -a to specify an operation."))?;
        let format: OutputFormat = args.format.into();

        // An explicit --log-level wins; -v alone opens the log up to debug notes.
        let log_level = args.log_level.map_or(
            if args.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            LevelFilter::from,
        );

        ConfigBuilder::default()
            .target(target)
            .recursive(args.recursive)
            .human(args.human)
            .format(format)
            .verbose(args.verbose)
            .color(resolve_color(args.color, format, std::io::stdout().is_terminal()))
            .sort_entries(args.sort)
            .log_path(args.log)
            .log_level(log_level)
            .build()
            .context("failed to build config")
    }
}

/// JSON output is never colored; `auto` follows whether stdout is a terminal.
pub fn resolve_color(choice: ColorChoice, format: OutputFormat, is_terminal: bool) -> bool {
    if format == OutputFormat::Json {
        return false;
    }
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_terminal,
    }
}
