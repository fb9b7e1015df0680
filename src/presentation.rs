// src/presentation.rs
use std::io::{self, Write};

use anyhow::{Context, Result};
use inspect_engine::Report;

use crate::config::Config;

/// Writes the rendered report to stdout and scan failures to stderr.
pub fn print_report(report: &Report, config: &Config) -> Result<()> {
    if let Report::Scan(scan) = report {
        for (_, err) in &scan.errors {
            eprintln!("Error: {err}");
        }
    }

    let rendered = report.render(config)?;
    write_output(&mut io::stdout().lock(), &rendered).context("failed to write output")
}

/// Nothing is written for an empty report.
fn write_output<W: Write>(out: &mut W, rendered: &str) -> io::Result<()> {
    if rendered.is_empty() {
        return Ok(());
    }
    writeln!(out, "{rendered}")?;
    out.flush()
}
