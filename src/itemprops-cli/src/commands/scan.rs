//! Scan command handler

use crate::cli::ScanFormat;
use anyhow::{Context, Result};
use itemprops::{scan_file, ScanConfig, ScanReport};
use std::io::{self, Write};
use std::path::Path;

/// Handle the scan command
///
/// A missing input is reported and treated as a normal exit. Any other load
/// failure, including malformed JSON, is returned as an error.
pub fn handle(input: &Path, format: ScanFormat) -> Result<()> {
    let report = match scan_file(&ScanConfig::new(input)) {
        Ok(report) => report,
        Err(e) if e.is_not_found() => {
            println!("File not found: {}", input.display());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to scan items"),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        ScanFormat::Text => write_text(&mut out, &report)?,
        ScanFormat::Json => write_json(&mut out, &report)?,
    }

    Ok(())
}

fn write_text<W: Write>(out: &mut W, report: &ScanReport) -> Result<()> {
    writeln!(out, "Scanning for properties with value > 0...")?;

    for m in &report.matches {
        writeln!(
            out,
            "Item: {} | Prop: {} | Value: {}",
            m.item,
            m.property,
            m.raw_text()
        )?;
    }

    writeln!(out, "\nTotal matches found: {}", report.count())?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> Result<()> {
    let json = serde_json::json!({
        "count": report.count(),
        "matches": report.matches,
    });

    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}
