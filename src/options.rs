//! Rendering options.
//!
//! Field names deserialize in camelCase so an options object written for
//! the Slack web client (`customEmoji`, `usergroups`, ...) loads as is.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::limits::MAX_PASS_REPLACEMENTS;

/// Read-only lookup table keyed by Slack ID or emoji short name.
pub type Table = FxHashMap<String, String>;

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Expand markup (`*bold*`, `` `code` ``, ...) before escaping.
    pub markdown: bool,
    /// Short name to code points (`1F44B`), `alias:<name>`, or image URL.
    pub custom_emoji: Table,
    /// User ID to display name.
    pub users: Table,
    /// Channel ID to display name.
    pub channels: Table,
    /// Subteam ID to display name.
    pub usergroups: Table,
    /// Match cap for each styling pass.
    pub max_replacements: usize,
    /// Replace every shortcode, not only the first.
    pub expand_all_emoji: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            markdown: false,
            custom_emoji: Table::default(),
            users: Table::default(),
            channels: Table::default(),
            usergroups: Table::default(),
            max_replacements: MAX_PASS_REPLACEMENTS,
            expand_all_emoji: false,
        }
    }
}

impl Options {
    /// Options with markup expansion switched on.
    pub fn markdown() -> Self {
        Self {
            markdown: true,
            ..Self::default()
        }
    }

    /// Parse options from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json).map_err(|source| Error::Options {
            path: "<inline>".into(),
            source,
        })?;
        options.validate()
    }

    /// Load options from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&json).map_err(|source| Error::Options {
            path: path.to_path_buf(),
            source,
        })?;
        options.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.max_replacements == 0 {
            return Err(Error::InvalidOptions(
                "maxReplacements must be at least 1".into(),
            ));
        }
        Ok(self)
    }
}
