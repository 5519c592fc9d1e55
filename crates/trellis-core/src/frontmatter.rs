//! Frontmatter metadata block

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Frontmatter metadata block
///
/// Supports both YAML (---) and TOML (+++) fences. Properties are
/// lazily parsed so documents whose metadata is never inspected pay
/// nothing for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Raw frontmatter content (without delimiters)
    pub raw: String,

    /// Frontmatter format
    pub format: FrontmatterFormat,

    /// Lazily parsed properties
    #[serde(skip)]
    properties: OnceLock<HashMap<String, serde_json::Value>>,
}

impl Frontmatter {
    /// Create new frontmatter from raw string
    pub fn new(raw: String, format: FrontmatterFormat) -> Self {
        Self {
            raw,
            format,
            properties: OnceLock::new(),
        }
    }

    /// Get parsed properties (lazy initialization)
    pub fn properties(&self) -> &HashMap<String, serde_json::Value> {
        self.properties.get_or_init(|| self.parse_properties())
    }

    /// Parse properties based on format
    fn parse_properties(&self) -> HashMap<String, serde_json::Value> {
        match self.format {
            FrontmatterFormat::Yaml => serde_yaml::from_str(&self.raw).unwrap_or_default(),
            FrontmatterFormat::Toml => toml::from_str(&self.raw)
                .ok()
                .and_then(|v: toml::Value| serde_json::to_value(v).ok())
                .and_then(|v| v.as_object().cloned())
                .map(|obj| obj.into_iter().collect())
                .unwrap_or_default(),
            FrontmatterFormat::None => HashMap::new(),
        }
    }

    /// Whether the raw text decodes to a key/value mapping at all
    ///
    /// Distinguishes "empty mapping" from "syntactically broken"; the
    /// parser needs that distinction to classify the failure.
    pub fn is_well_formed(&self) -> bool {
        match self.format {
            FrontmatterFormat::Yaml => {
                let trimmed = self.raw.trim();
                if trimmed.is_empty() {
                    return true;
                }
                matches!(
                    serde_yaml::from_str::<serde_yaml::Value>(&self.raw),
                    Ok(serde_yaml::Value::Mapping(_)) | Ok(serde_yaml::Value::Null)
                )
            }
            FrontmatterFormat::Toml => toml::from_str::<toml::Value>(&self.raw).is_ok(),
            FrontmatterFormat::None => true,
        }
    }

    /// Get the raw JSON value of a property
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties().get(key)
    }

    /// Get a string property
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.properties().get(key)?.as_str().map(|s| s.to_string())
    }

    /// Get an array-of-strings property
    ///
    /// Non-string items are dropped; shape validation is the parser's
    /// job via [`Frontmatter::get`].
    pub fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        self.properties()
            .get(key)?
            .as_array()?
            .iter()
            .filter_map(|v| v.as_str().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    /// Check if a property exists
    pub fn has(&self, key: &str) -> bool {
        self.properties().contains_key(key)
    }
}

// Lazily parsed properties are a cache of `raw`; equality is the raw text.
impl PartialEq for Frontmatter {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.format == other.format
    }
}

impl Eq for Frontmatter {}

/// Frontmatter format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrontmatterFormat {
    /// YAML frontmatter (---)
    Yaml,
    /// TOML frontmatter (+++)
    Toml,
    /// No frontmatter
    None,
}
