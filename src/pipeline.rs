//! Naming pipeline coordinating all stages
//!
//! This module provides:
//! - Workflow coordination: concatenate → resolve → sort → group → annotate
//! - The enriched result handed to the output formatters

use crate::config::Configuration;
use crate::domain::{Dependency, DependencyGraph};
use crate::error::NamingError;
use crate::naming::{
    annotate, ensure_unique, group_versions, resolve_identifiers, sort_dependencies, Annotation,
};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

/// A dependency with its resolved identifiers and version comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    #[serde(flatten)]
    pub dependency: Dependency,
    /// Comment for the version entry
    pub annotation: Annotation,
}

/// One generated version constant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionEntry<'a> {
    /// Constant name
    pub name: &'a str,
    /// Version string
    pub version: &'a str,
    /// Comment of the first dependency using this constant
    pub annotation: &'a Annotation,
}

/// Result of running the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Dependencies in canonical order
    pub dependencies: Vec<ResolvedDependency>,
    /// Groups sharing a single version constant
    pub collapsed_groups: BTreeSet<String>,
}

impl Resolution {
    /// Number of library constants
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// Returns true if there is nothing to generate
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Distinct version constants, in order of first use
    pub fn versions(&self) -> Vec<VersionEntry<'_>> {
        let mut seen = HashSet::new();
        self.dependencies
            .iter()
            .filter(|r| seen.insert(r.dependency.version_name.as_str()))
            .map(|r| VersionEntry {
                name: &r.dependency.version_name,
                version: &r.dependency.version,
                annotation: &r.annotation,
            })
            .collect()
    }

    /// Iterate over the resolved dependencies
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedDependency> {
        self.dependencies.iter()
    }
}

/// Runs the naming stages over a dependency graph
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: Configuration,
}

impl Pipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Returns the configuration in use
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Run every stage and return the enriched dependency list
    pub fn run(&self, graph: &DependencyGraph) -> Result<Resolution, NamingError> {
        // Step 1: Concatenate the four status lists
        let mut dependencies = graph.concat();
        info!(
            "Naming {} dependencies ({} reported)",
            dependencies.len(),
            graph.len()
        );

        // Step 2: Assign short or fully-qualified identifiers
        resolve_identifiers(&mut dependencies, &self.config.use_fdqn_by_default)?;

        // Step 3: Canonical order
        sort_dependencies(&mut dependencies);
        ensure_unique(&dependencies)?;

        // Step 4: Share version constants across lockstep groups
        let collapsed_groups = group_versions(&mut dependencies);
        debug!("Collapsed {} groups", collapsed_groups.len());

        // Step 5: Version comments
        let dependencies = dependencies
            .into_iter()
            .map(|dependency| ResolvedDependency {
                annotation: annotate(&dependency),
                dependency,
            })
            .collect();

        Ok(Resolution {
            dependencies,
            collapsed_groups,
        })
    }
}
