use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Reader and writer settings, usually loaded from a TOML file
///
/// ```text
/// [reader]
/// strict_index = true
///
/// [writer]
/// escape_text = true
/// ```
///
/// Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub reader: ReaderOptions,
    pub writer: WriterOptions,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Fail on an index which does not follow the previous one instead of
    /// logging it
    pub strict_index: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Escape `&`, `<` and `>` in cue text so that it reads back unchanged
    pub escape_text: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self { escape_text: true }
    }
}

impl Options {
    pub fn from_toml<S: AsRef<str>>(content: S) -> Result<Self> {
        Ok(toml::from_str::<Options>(content.as_ref())?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_toml(content).map_err(|e| {
            log::error!("failed to parse config {}: {e}", path.display());
            e
        })
    }
}
