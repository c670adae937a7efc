//! Value scanner: find every property whose value holds a positive number.
//!
//! The scan is purely observational. Items are visited in document order and
//! properties in mapping order, so reports are reproducible for a given file.

use crate::document::{self, DocumentError};
use crate::value::{parse_numeric, RawValue};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// Where the scanner reads its document from.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub input: PathBuf,
}

impl ScanConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// One property whose extracted value is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanMatch {
    /// Item `class_name` (or `"Unknown"`)
    pub item: String,
    /// Property key within the item's `properties` mapping
    pub property: String,
    /// The `value` field exactly as stored
    pub raw: Value,
    /// Number extracted from `raw`
    pub number: f64,
}

impl ScanMatch {
    /// Raw value as plain text (strings unquoted).
    pub fn raw_text(&self) -> String {
        crate::value::value_text(&self.raw).into_owned()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanReport {
    pub matches: Vec<ScanMatch>,
}

impl ScanReport {
    pub fn count(&self) -> usize {
        self.matches.len()
    }
}

/// Scan a list of items.
///
/// Items that are not objects, and `properties` or property values that are
/// not mappings, contribute nothing.
pub fn scan_items(items: &[Value]) -> ScanReport {
    let mut report = ScanReport::default();

    for item in items {
        let Some(obj) = item.as_object() else {
            tracing::warn!("Skipping non-object item: {}", item);
            continue;
        };

        let Some(properties) = obj.get("properties").and_then(Value::as_object) else {
            continue;
        };

        let name = document::item_name(item);

        for (key, property) in properties {
            if let Some(found) = scan_property(&name, key, property) {
                report.matches.push(found);
            }
        }
    }

    tracing::debug!(
        "Scanned {} items, {} matches",
        items.len(),
        report.count()
    );
    report
}

fn scan_property(item: &str, key: &str, property: &Value) -> Option<ScanMatch> {
    let raw = RawValue::of_property(property);
    if raw.is_skipped() {
        return None;
    }

    let number = parse_numeric(&raw.text()?);
    if number <= 0.0 {
        return None;
    }

    Some(ScanMatch {
        item: item.to_string(),
        property: key.to_string(),
        raw: raw.value()?.clone(),
        number,
    })
}

/// Load the configured document and scan it.
///
/// A non-array root has no items and produces an empty report.
pub fn scan_file(config: &ScanConfig) -> Result<ScanReport, DocumentError> {
    let doc = document::read_document(&config.input)?;

    match document::items(&doc) {
        Some(items) => Ok(scan_items(items)),
        None => {
            tracing::warn!("{} is not a list of items", config.input.display());
            Ok(ScanReport::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn items_of(doc: &Value) -> &[Value] {
        doc.as_array().unwrap()
    }

    #[test]
    fn test_scan_rifle_scenario() {
        let doc = json!([{
            "class_name": "Rifle",
            "properties": {
                "damage": {"value": "25"},
                "speed": {"value": "-3m/s"}
            }
        }]);

        let report = scan_items(items_of(&doc));
        assert_eq!(report.count(), 1);

        let found = &report.matches[0];
        assert_eq!(found.item, "Rifle");
        assert_eq!(found.property, "damage");
        assert_eq!(found.raw, json!("25"));
        assert_eq!(found.number, 25.0);
    }

    #[test]
    fn test_scan_preserves_document_order() {
        let doc = json!([
            {"class_name": "B", "properties": {"z": {"value": "1"}, "a": {"value": "2%"}}},
            {"class_name": "A", "properties": {"m": {"value": "0.5s"}}}
        ]);

        let report = scan_items(items_of(&doc));
        let order: Vec<(&str, &str)> = report
            .matches
            .iter()
            .map(|m| (m.item.as_str(), m.property.as_str()))
            .collect();
        assert_eq!(order, [("B", "z"), ("B", "a"), ("A", "m")]);
    }

    #[test]
    fn test_scan_skips_empty_values() {
        let doc = json!([{
            "class_name": "Pistol",
            "properties": {
                "missing": {"label": "Nothing"},
                "null": {"value": null},
                "empty": {"value": ""},
                "zero": {"value": 0},
                "zero_text": {"value": "0"},
                "words": {"value": "fast"}
            }
        }]);

        assert_eq!(scan_items(items_of(&doc)).count(), 0);
    }

    #[test]
    fn test_scan_numeric_values_use_text_form() {
        let doc = json!([{
            "properties": {
                "int": {"value": 12},
                "float": {"value": 0.25},
                "negative": {"value": -4},
                "flag": {"value": true}
            }
        }]);

        let report = scan_items(items_of(&doc));
        let props: Vec<&str> = report.matches.iter().map(|m| m.property.as_str()).collect();
        assert_eq!(props, ["int", "float"]);
        assert_eq!(report.matches[0].item, "Unknown");
        assert_eq!(report.matches[0].raw_text(), "12");
    }

    #[test]
    fn test_scan_tolerates_odd_shapes() {
        let doc = json!([
            "not an item",
            {"class_name": "NoProps"},
            {"class_name": "ListProps", "properties": ["x"]},
            {"class_name": "ScalarProp", "properties": {"p": "5"}},
            {"class_name": "Ok", "properties": {"p": {"value": "5"}}}
        ]);

        let report = scan_items(items_of(&doc));
        assert_eq!(report.count(), 1);
        assert_eq!(report.matches[0].item, "Ok");
    }

    #[test]
    fn test_scan_file_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ScanConfig::new(temp_dir.path().join("missing.json"));

        let err = scan_file(&config).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_scan_file_malformed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();

        let err = scan_file(&ScanConfig::new(&path)).unwrap_err();
        assert!(matches!(err, DocumentError::Json { .. }));
    }

    #[test]
    fn test_scan_file() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("items.json");
        fs::write(
            &path,
            r#"[{"class_name": "SMG", "properties": {"fire_rate": {"value": "+12%"}}}]"#,
        )?;

        let report = scan_file(&ScanConfig::new(&path))?;
        assert_eq!(report.count(), 1);
        assert_eq!(report.matches[0].raw_text(), "+12%");
        assert_eq!(report.matches[0].number, 12.0);
        Ok(())
    }
}
