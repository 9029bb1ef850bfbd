//! Blockifier configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a [`PdfBlockifier`](crate::blockify::PdfBlockifier).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockifierConfig {
    /// PDF parsing backend used to extract page text
    pub loader: Loader,

    /// When a page counts as blank
    pub empty_check: EmptyCheck,
}

impl BlockifierConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the loader.
    pub fn with_loader(mut self, loader: Loader) -> Self {
        self.loader = loader;
        self
    }

    /// Set the blank page check.
    pub fn with_empty_check(mut self, check: EmptyCheck) -> Self {
        self.empty_check = check;
        self
    }

    /// Keep pages whose text only becomes empty after null stripping.
    pub fn raw_empty_check(self) -> Self {
        self.with_empty_check(EmptyCheck::Raw)
    }

    /// Parse a configuration from a JSON object.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use pdf_blockifier::{BlockifierConfig, Loader};
    ///
    /// let config = BlockifierConfig::from_json(r#"{"loader": "pdf-extract"}"#).unwrap();
    /// assert_eq!(config.loader, Loader::PdfExtract);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        Self::from_value(value)
    }

    /// Build a configuration from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        // Checked up front so a bad name reports as UnknownLoader.
        if let Some(name) = value.get("loader").and_then(|v| v.as_str()) {
            name.parse::<Loader>()?;
        }
        serde_json::from_value(value).map_err(|e| Error::Config(e.to_string()))
    }
}

/// PDF parsing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Loader {
    /// lopdf's per-page text extraction
    #[default]
    Lopdf,
    /// pdf-extract's layout-following text output
    PdfExtract,
}

impl Loader {
    /// Every supported loader.
    pub const ALL: [Loader; 2] = [Loader::Lopdf, Loader::PdfExtract];

    /// Name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Loader::Lopdf => "lopdf",
            Loader::PdfExtract => "pdf-extract",
        }
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Loader {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Loader::ALL
            .into_iter()
            .find(|loader| loader.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownLoader(name.to_string()))
    }
}

impl Serialize for Loader {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Loader {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown loader: {}", name)))
    }
}

/// When a page's text counts as blank and gets dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCheck {
    /// Drop only pages whose extracted text is exactly empty. A page made of
    /// null characters survives as an empty block.
    Raw,
    /// Also drop pages whose text is empty once null characters are removed
    #[default]
    Normalized,
}
