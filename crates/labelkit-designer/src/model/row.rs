//! Label rows: one printable record per row.

use labelkit_core::digits_only;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known row keys
pub mod fields {
    pub const LOGO: &str = "logo";
    pub const PERFUME_NAME: &str = "perfume_name";
    pub const SHOP_NAME: &str = "shop_name";
    pub const PRICE: &str = "price";
    pub const MULTIPLIER: &str = "multiplier";
    pub const EXTRA_INFO: &str = "extra_info";

    /// Keys that only accept ASCII digits
    pub const NUMERIC: [&str; 2] = [PRICE, MULTIPLIER];
}

/// Mapping from element id (or well-known key) to content
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelRow(BTreeMap<String, String>);

impl LabelRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert without digit gating; for fixtures and imports.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Whether `value` is an acceptable edit for `key`.
    pub fn accepts(key: &str, value: &str) -> bool {
        !fields::NUMERIC.contains(&key) || digits_only(value)
    }

    /// Apply an edit. A rejected edit leaves the previous value in place and
    /// returns false.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        if !Self::accepts(key, value) {
            return false;
        }
        if value.is_empty() {
            self.0.remove(key);
        } else {
            self.0.insert(key.to_string(), value.to_string());
        }
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value with surrounding whitespace removed, `None` when blank.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
