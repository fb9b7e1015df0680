// src/app.rs
use anyhow::{Result, bail};
use clap::CommandFactory;
use inspect_engine::event_log::EventLog;

use crate::cli::Args;
use crate::config::Config;
use crate::presentation;

pub fn run(args: Args) -> Result<()> {
    if args.target().is_none() {
        print_help();
        bail!("No operation specified. Use -i or -a to specify an operation.");
    }

    let config = Config::try_from(args)?;
    // Opened before any inspection so an unusable log path aborts the run up front.
    let mut log = EventLog::from_config(&config)?;
    log::debug!("running with {config:?}");

    match inspect_engine::run(&config, &mut log) {
        Ok(report) => presentation::print_report(&report, &config),
        Err(e) => {
            log.failure(&e);
            Err(e.into())
        }
    }
}

fn print_help() {
    if let Err(e) = Args::command().print_help() {
        log::warn!("could not print help: {e}");
    }
}
