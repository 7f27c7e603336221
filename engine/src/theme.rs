//! Theme configuration documents
//!
//! A theme document is a JSON object keyed by theme name; each value maps
//! style-variable names to values. Selection prefers the entry named
//! `"default"`, falling back to the first entry in document order.
//!
//! Styling is strictly optional: retrieval and parse failures are the
//! caller's to swallow, and a document with no usable entry simply selects
//! nothing.

use crate::error::AbacusError;
use crate::AbacusResult;
use serde::Deserialize;
use serde_json::Value;

/// A parsed themes document, entries kept in document order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ThemeSet {
    themes: serde_json::Map<String, Value>,
}

impl ThemeSet {
    /// Parse a themes JSON document.
    pub fn parse(json: &str) -> AbacusResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AbacusError::Engine(format!("Invalid theme document: {}", e)))
    }

    /// The `"default"` entry if present and usable, else the first entry in
    /// document order. Entries that are not objects are skipped.
    pub fn select(&self) -> Option<Theme> {
        self.themes
            .get("default")
            .or_else(|| self.themes.values().next())
            .and_then(Theme::from_value)
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// A single theme: style-variable assignments in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    variables: Vec<(String, String)>,
}

impl Theme {
    fn from_value(value: &Value) -> Option<Self> {
        let Value::Object(vars) = value else {
            return None;
        };
        let variables = vars
            .iter()
            .map(|(name, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), rendered)
            })
            .collect();
        Some(Self { variables })
    }

    /// Iterate variables in document order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
