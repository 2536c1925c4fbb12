//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the resolved dependency constants
//! - The distinct version constants with their comments

use crate::naming::Placement;
use crate::output::{OutputFormatter, Verbosity};
use crate::pipeline::{Resolution, ResolvedDependency};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    /// Version constants
    versions: Vec<JsonVersion<'a>>,
    /// Library constants
    libraries: Vec<JsonLibrary<'a>>,
    /// Groups sharing one version constant (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    collapsed_groups: Option<Vec<&'a str>>,
    /// Full dependency records (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    dependencies: Option<&'a [ResolvedDependency]>,
}

/// JSON representation of a version constant
#[derive(Serialize)]
struct JsonVersion<'a> {
    /// Constant name
    name: &'a str,
    /// Version string
    version: &'a str,
    /// Comment, omitted when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    /// Comment placement, omitted when there is no comment
    #[serde(skip_serializing_if = "Option::is_none")]
    placement: Option<Placement>,
}

/// JSON representation of a library constant
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonLibrary<'a> {
    /// Constant name
    name: &'a str,
    /// `group:name`
    module: String,
    /// Referenced version constant, absent for artifacts without a version
    #[serde(skip_serializing_if = "Option::is_none")]
    version_ref: Option<&'a str>,
}

impl JsonFormatter {
    fn library_to_json(resolved: &ResolvedDependency) -> JsonLibrary<'_> {
        let dep = &resolved.dependency;
        JsonLibrary {
            name: &dep.escaped_name,
            module: dep.module(),
            version_ref: (!dep.has_no_version()).then_some(dep.version_name.as_str()),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, resolution: &Resolution, writer: &mut dyn Write) -> std::io::Result<()> {
        let verbose = self.verbosity == Verbosity::Verbose;

        let versions = resolution
            .versions()
            .into_iter()
            .map(|entry| JsonVersion {
                name: entry.name,
                version: entry.version,
                comment: (!entry.annotation.is_empty()).then_some(entry.annotation.comment.as_str()),
                placement: (!entry.annotation.is_empty()).then_some(entry.annotation.placement),
            })
            .collect();

        let output = JsonOutput {
            versions,
            libraries: resolution.iter().map(Self::library_to_json).collect(),
            collapsed_groups: verbose
                .then(|| resolution.collapsed_groups.iter().map(String::as_str).collect()),
            dependencies: verbose.then_some(resolution.dependencies.as_slice()),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
