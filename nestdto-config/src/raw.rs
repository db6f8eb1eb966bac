//! Loosely-typed option bag as supplied by the host.

use indexmap::IndexMap;
use nestdto_core::toml_value_to_string;

use crate::{Error, Result, keys};

/// Textual option values keyed by option name.
///
/// Every value is kept as text regardless of where it came from; typing
/// happens once, in [`GenerationOptions::normalize`](crate::GenerationOptions::normalize).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    values: IndexMap<String, String>,
}

impl RawOptions {
    /// Create an empty option bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a TOML table, stringifying scalar values.
    ///
    /// Arrays and nested tables are not options and are skipped.
    pub fn from_toml_table(table: &toml::Table) -> Self {
        table
            .iter()
            .filter(|(_, v)| !matches!(v, toml::Value::Array(_) | toml::Value::Table(_)))
            .map(|(k, v)| (k.clone(), toml_value_to_string(v)))
            .collect()
    }

    /// Set an option, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Apply a `key=value` override.
    pub fn apply_override(&mut self, pair: &str) -> Result<()> {
        let (key, value) = pair
            .split_once('=')
            .filter(|(k, _)| !k.trim().is_empty())
            .ok_or_else(|| {
                Box::new(Error::InvalidOverride {
                    pair: pair.to_string(),
                })
            })?;
        self.insert(key.trim(), value.trim());
        Ok(())
    }

    /// Get an option value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Keys that are not recognized generation options.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|k| !keys::ALL.contains(k) && !keys::RESERVED.contains(k))
            .collect()
    }

    /// Number of options set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no options are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawOptions {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_table_stringifies() {
        let table: toml::Table = toml::from_str(
            r#"
            reExport = true
            usePrettier = "false"
            fileNamingStyle = "snake"
            depth = 3
            tags = ["a"]
            "#,
        )
        .unwrap();

        let raw = RawOptions::from_toml_table(&table);
        assert_eq!(raw.get("reExport"), Some("true"));
        assert_eq!(raw.get("usePrettier"), Some("false"));
        assert_eq!(raw.get("fileNamingStyle"), Some("snake"));
        assert_eq!(raw.get("depth"), Some("3"));
        assert_eq!(raw.get("tags"), None);
    }

    #[test]
    fn test_apply_override() {
        let mut raw = RawOptions::new();
        raw.insert("reExport", "false");
        raw.apply_override("reExport=true").unwrap();
        raw.apply_override(" dtoSuffix = Input ").unwrap();

        assert_eq!(raw.get("reExport"), Some("true"));
        assert_eq!(raw.get("dtoSuffix"), Some("Input"));
    }

    #[test]
    fn test_apply_override_allows_empty_value() {
        let mut raw = RawOptions::new();
        raw.apply_override("dtoSuffix=").unwrap();
        assert_eq!(raw.get("dtoSuffix"), Some(""));
    }

    #[test]
    fn test_apply_override_rejects_malformed() {
        let mut raw = RawOptions::new();
        assert!(raw.apply_override("reExport").is_err());
        assert!(raw.apply_override("=true").is_err());
        assert!(raw.is_empty());
    }

    #[test]
    fn test_unknown_keys() {
        let raw: RawOptions = [
            ("reExport", "true"),
            ("output", "./out"),
            ("fileNamingstyle", "snake"),
        ]
        .into_iter()
        .collect();

        assert_eq!(raw.unknown_keys(), vec!["fileNamingstyle"]);
    }
}
