//! Prune command handler
//!
//! Every expected failure (missing input, bad JSON, wrong root shape, write
//! error) is reported on stdout and ends the run without an error status.

use anyhow::Result;
use itemprops::{prune_document, read_document, write_document, PruneError};
use serde_json::Value;
use std::path::Path;

/// Handle the prune command
pub fn handle(input: &Path, output: &Path) -> Result<()> {
    if !input.exists() {
        println!("Error: Input file not found at {}", input.display());
        return Ok(());
    }

    println!("Reading {}...", input.display());
    let document = match read_document(input) {
        Ok(doc) => doc,
        Err(e) => {
            println!("Error reading JSON: {}", e);
            return Ok(());
        }
    };

    println!("Processing items...");
    let (items, summary) = match prune_document(&document) {
        Ok(pruned) => pruned,
        Err(PruneError::NotAnArray) => {
            println!("Error: Root data is not a list.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        items = summary.items,
        properties = summary.properties,
        removed_fields = summary.removed_fields,
        "Pruned properties"
    );

    println!("Writing to {}...", output.display());
    match write_document(output, &Value::Array(items)) {
        Ok(()) => println!("Done."),
        Err(e) => println!("Error writing JSON: {}", e),
    }

    Ok(())
}
