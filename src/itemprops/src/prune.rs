//! Property pruner: reduce every property object to a fixed set of keys.
//!
//! The outer `properties` mapping keeps every key it had, even when the
//! pruned object ends up empty. Only the inner objects lose fields.
//! `scale_function` is copied verbatim however deeply it nests.

use crate::document::{self, DocumentError};
use serde_json::{Map, Value};
use std::path::PathBuf;
use thiserror::Error;

/// Property object keys that survive pruning.
pub const WHITELIST: [&str; 7] = [
    "value",
    "scale_function",
    "provided_property_type",
    "usage_flags",
    "conditional",
    "disable_value",
    "scaling_stats",
];

#[derive(Error, Debug)]
pub enum PruneError {
    #[error("root data is not a list")]
    NotAnArray,

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Input and output paths for a prune run.
#[derive(Debug, Clone)]
pub struct PruneConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl PruneConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Counts gathered while pruning a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneSummary {
    pub items: usize,
    pub properties: usize,
    pub removed_fields: usize,
}

pub fn is_whitelisted(key: &str) -> bool {
    WHITELIST.iter().any(|k| *k == key)
}

/// Prune a single property object.
///
/// Non-object values should not occur in well-formed input; they are
/// returned unchanged.
pub fn prune_property(property: &Value) -> Value {
    let Value::Object(fields) = property else {
        return property.clone();
    };

    let kept: Map<String, Value> = fields
        .iter()
        .filter(|(key, _)| is_whitelisted(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Value::Object(kept)
}

/// Copy an item with its `properties` mapping pruned.
///
/// All other top-level fields pass through. Items without a `properties`
/// mapping, and non-object items, are returned as they are.
pub fn prune_item(item: &Value) -> Value {
    let mut summary = PruneSummary::default();
    prune_item_counted(item, &mut summary)
}

fn prune_item_counted(item: &Value, summary: &mut PruneSummary) -> Value {
    summary.items += 1;

    let Value::Object(fields) = item else {
        return item.clone();
    };

    let mut copy = fields.clone();
    if let Some(Value::Object(properties)) = fields.get("properties") {
        let pruned: Map<String, Value> = properties
            .iter()
            .map(|(key, property)| {
                let kept = prune_property(property);
                summary.properties += 1;
                summary.removed_fields += removed_count(property, &kept);
                (key.clone(), kept)
            })
            .collect();

        copy.insert("properties".to_string(), Value::Object(pruned));
    }

    Value::Object(copy)
}

fn removed_count(before: &Value, after: &Value) -> usize {
    match (before.as_object(), after.as_object()) {
        (Some(before), Some(after)) => before.len() - after.len(),
        _ => 0,
    }
}

/// Prune every item in a document whose root must be an array.
pub fn prune_items(document: &Value) -> Result<Vec<Value>, PruneError> {
    prune_document(document).map(|(items, _)| items)
}

/// Like [`prune_items`], also returning counts.
pub fn prune_document(document: &Value) -> Result<(Vec<Value>, PruneSummary), PruneError> {
    let items = document::items(document).ok_or(PruneError::NotAnArray)?;

    let mut summary = PruneSummary::default();
    let pruned = items
        .iter()
        .map(|item| prune_item_counted(item, &mut summary))
        .collect();

    tracing::debug!(
        "Pruned {} items, {} properties, {} fields removed",
        summary.items,
        summary.properties,
        summary.removed_fields
    );
    Ok((pruned, summary))
}

/// Read, prune and write in one call.
///
/// Nothing is written unless the input loads and has an array root.
pub fn prune_file(config: &PruneConfig) -> Result<PruneSummary, PruneError> {
    let doc = document::read_document(&config.input)?;
    let (items, summary) = prune_document(&doc)?;
    document::write_document(&config.output, &Value::Array(items))?;
    Ok(summary)
}
