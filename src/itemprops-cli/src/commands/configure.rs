//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting default dataset paths.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `input` - Optional default raw items path
/// * `cleaned` - Optional default cleaned items path
/// * `show` - If true, show current configuration
pub fn handle(input: Option<PathBuf>, cleaned: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if input.is_none() && cleaned.is_none() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, input, cleaned);
    config.save()?;

    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

fn apply(config: &mut Config, input: Option<PathBuf>, cleaned: Option<PathBuf>) {
    if let Some(path) = input {
        config.input = Some(path);
    }
    if let Some(path) = cleaned {
        config.cleaned = Some(path);
    }
}

/// Display current configuration
fn show_config(config: &Config) {
    println!("Input:   {}", config.resolve_input(None).display());
    println!("Cleaned: {}", config.resolve_cleaned(None).display());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn show_usage() {
    println!("Usage: itemprops configure --input RAW_ITEMS_JSON");
    println!("   or: itemprops configure --cleaned CLEANED_ITEMS_JSON");
    println!("   or: itemprops configure --show");
}
