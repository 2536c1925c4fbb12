//! Dependency information structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version sentinel for artifacts that carry no version (e.g. plugin markers)
pub const NO_VERSION: &str = "none";

fn no_version() -> String {
    NO_VERSION.to_string()
}

/// Newer versions reported for a dependency, one per release channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableUpdate {
    #[serde(default)]
    pub release: Option<String>,
    #[serde(default)]
    pub milestone: Option<String>,
    #[serde(default)]
    pub integration: Option<String>,
}

impl AvailableUpdate {
    /// Creates an update with only a release version
    pub fn release(version: impl Into<String>) -> Self {
        Self {
            release: Some(version.into()),
            ..Self::default()
        }
    }

    /// Creates an update with only a milestone version
    pub fn milestone(version: impl Into<String>) -> Self {
        Self {
            milestone: Some(version.into()),
            ..Self::default()
        }
    }

    /// Creates an update with only an integration version
    pub fn integration(version: impl Into<String>) -> Self {
        Self {
            integration: Some(version.into()),
            ..Self::default()
        }
    }

    /// Returns the most stable newer version, skipping blank channels
    pub fn newer_version(&self) -> Option<&str> {
        fn present(channel: &Option<String>) -> Option<&str> {
            channel.as_deref().filter(|v| !v.trim().is_empty())
        }

        present(&self.release)
            .or_else(|| present(&self.milestone))
            .or_else(|| present(&self.integration))
    }
}

impl fmt::Display for AvailableUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |channel: &Option<String>| channel.clone().unwrap_or_else(|| "null".to_string());
        write!(
            f,
            "AvailableUpdate(release={}, milestone={}, integration={})",
            show(&self.release),
            show(&self.milestone),
            show(&self.integration)
        )
    }
}

/// Represents a resolved external dependency
///
/// The coordinates (`group`, `name`, `version`) come from the dependency
/// report and are never changed. `escaped_name` and `version_name` are
/// filled in by the naming pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Group (organization) coordinate
    pub group: String,
    /// Artifact name
    pub name: String,
    /// Resolved version, or [`NO_VERSION`]
    #[serde(default = "no_version", deserialize_with = "version_or_none")]
    pub version: String,
    /// Identifier of the library constant
    #[serde(default, skip_deserializing)]
    pub escaped_name: String,
    /// Identifier of the version constant
    #[serde(default, skip_deserializing)]
    pub version_name: String,
    /// Newer versions, if the report knows of any
    #[serde(default, alias = "availableUpdate", skip_serializing_if = "Option::is_none")]
    pub available: Option<AvailableUpdate>,
    /// Project homepage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
}

fn version_or_none<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let version: Option<String> = Option::deserialize(deserializer)?;
    Ok(version.unwrap_or_else(no_version))
}

impl Dependency {
    /// Creates a new dependency from its coordinates
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            escaped_name: String::new(),
            version_name: String::new(),
            available: None,
            project_url: None,
        }
    }

    /// Sets the available update (builder pattern)
    pub fn with_available(mut self, available: AvailableUpdate) -> Self {
        self.available = Some(available);
        self
    }

    /// Sets the project URL (builder pattern)
    pub fn with_project_url(mut self, url: impl Into<String>) -> Self {
        self.project_url = Some(url.into());
        self
    }

    /// Returns true if no version applies to this artifact
    pub fn has_no_version(&self) -> bool {
        self.version == NO_VERSION
    }

    /// Canonical `group:name:version` string, used as the sort key
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }

    /// `group:name` without the version
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_no_version() {
            write!(f, "{}", self.module())
        } else {
            write!(f, "{}", self.coordinate())
        }
    }
}
