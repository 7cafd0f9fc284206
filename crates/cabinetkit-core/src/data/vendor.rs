//! Vendor specification key/value pairs
//!
//! Free-form manufacturing details entered by the cabinet vendor. The
//! `notes` entry is special: the prompt compiler appends it verbatim at the
//! end instead of listing it with the other pairs.

use serde::{Deserialize, Serialize};

/// Key of the free-text notes entry.
pub const NOTES_KEY: &str = "notes";

/// Ordered vendor specification entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorSpecs(Vec<(String, String)>);

impl VendorSpecs {
    /// Create an empty spec list
    pub fn new() -> Self {
        Self::default()
    }

    /// The defaults a vendor starts from
    pub fn with_defaults() -> Self {
        let mut specs = Self::new();
        specs.set("boardThickness", "18mm");
        specs.set("backPanel", "9mm");
        specs.set("hardware", "zinc alloy concealed hinges");
        specs.set("maxCabinetWidth", "120cm");
        specs.set("minCabinetWidth", "30cm");
        specs.set("maxCabinetHeight", "300cm");
        specs.set("surfaceFinish", "double-sided melamine");
        specs.set("edgeBanding", "0.4mm ABS edge banding");
        specs.set(NOTES_KEY, "");
        specs
    }

    /// Set a value, keeping the original position of an existing key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Merge stored values over these, as the admin form does on load
    pub fn merge(&mut self, other: &VendorSpecs) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// All entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries except the notes, skipping blank values
    pub fn listed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(k, v)| *k != NOTES_KEY && !v.trim().is_empty())
    }

    /// The free-text notes, if any
    pub fn notes(&self) -> Option<&str> {
        self.get(NOTES_KEY).filter(|n| !n.trim().is_empty())
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VendorSpecs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut specs = VendorSpecs::new();
        for (k, v) in iter {
            specs.set(k, v);
        }
        specs
    }
}
