//! # itemprops
//!
//! Tools for item definition datasets: JSON arrays of items, each carrying a
//! `properties` mapping of stat objects.
//!
//! This library provides:
//! - Numeric extraction from loosely typed property values
//! - A scanner reporting every property with a positive value
//! - A pruner reducing property objects to a fixed whitelist of keys
//!
//! ## Example
//!
//! ```no_run
//! use itemprops::{prune_file, scan_file, PruneConfig, ScanConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = prune_file(&PruneConfig::new("items_weapon.json", "items_weapon_cleaned.json"))?;
//! println!("Pruned {} properties", summary.properties);
//!
//! let report = scan_file(&ScanConfig::new("items_weapon_cleaned.json"))?;
//! for m in &report.matches {
//!     println!("{} {} {}", m.item, m.property, m.number);
//! }
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod prune;
pub mod scan;
pub mod value;

#[doc(inline)]
pub use document::{item_name, read_document, write_document, DocumentError, UNKNOWN_ITEM};
#[doc(inline)]
pub use prune::{
    is_whitelisted, prune_document, prune_file, prune_item, prune_items, prune_property,
    PruneConfig, PruneError, PruneSummary, WHITELIST,
};
#[doc(inline)]
pub use scan::{scan_file, scan_items, ScanConfig, ScanMatch, ScanReport};
#[doc(inline)]
pub use value::{extract_number, parse_numeric, value_text, RawValue};
