//! Naming configuration
//!
//! Loaded from an optional TOML file and merged with CLI options:
//!
//! ```toml
//! useFdqnByDefault = ["core", "common"]
//! includeCommonNames = false
//! ```

use crate::error::ConfigError;
use crate::naming::escape;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Artifact names too generic to be useful on their own
pub const COMMON_MEANINGLESS_NAMES: [&str; 18] = [
    "annotations",
    "collection",
    "common",
    "compiler",
    "core",
    "db",
    "extensions",
    "gson",
    "io",
    "loader",
    "media",
    "migration",
    "moshi",
    "print",
    "rules",
    "runner",
    "runtime",
    "testing",
];

/// On-disk configuration file layout
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigFile {
    /// Short names that always use the fully-qualified identifier
    pub use_fdqn_by_default: Vec<String>,
    /// Adds [`COMMON_MEANINGLESS_NAMES`] to `use_fdqn_by_default`
    pub include_common_names: bool,
}

/// Naming configuration used by the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Escaped short identifiers forced to the fully-qualified form
    pub use_fdqn_by_default: BTreeSet<String>,
}

impl Configuration {
    /// Create an empty configuration (no forced names)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names forced to the fully-qualified form
    ///
    /// Names are escaped so `Core` and `core` match the same artifacts.
    pub fn with_fdqn_names<I, S>(mut self, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let escaped = escape(name.as_ref().trim());
            if escaped.is_empty() {
                return Err(ConfigError::InvalidIdentifier {
                    value: name.as_ref().to_string(),
                });
            }
            self.use_fdqn_by_default.insert(escaped);
        }
        Ok(self)
    }

    /// Add [`COMMON_MEANINGLESS_NAMES`]
    pub fn with_common_names(mut self) -> Self {
        self.use_fdqn_by_default
            .extend(COMMON_MEANINGLESS_NAMES.iter().map(|n| n.to_string()));
        self
    }

    /// Build a configuration from a parsed file
    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let config = Self::new().with_fdqn_names(&file.use_fdqn_by_default)?;
        Ok(if file.include_common_names {
            config.with_common_names()
        } else {
            config
        })
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::toml_parse_error(path, e.to_string()))?;
        Self::from_file(file)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        let config = Self::from_toml(&content, path)?;
        debug!(
            "Loaded {} forced fully-qualified names from {}",
            config.use_fdqn_by_default.len(),
            path.display()
        );
        Ok(config)
    }

    /// Returns true if the short identifier must be fully-qualified
    pub fn forces_fdqn(&self, short: &str) -> bool {
        self.use_fdqn_by_default.contains(short)
    }
}
