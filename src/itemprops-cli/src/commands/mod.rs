//! Command handlers for itemprops CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod prune;
pub mod scan;
