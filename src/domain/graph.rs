//! Dependency graph as reported by the build tool
//!
//! Mirrors the JSON report of the Gradle versions plugin: one object per
//! resolution status, each holding a `dependencies` array. Other top-level
//! keys (`count`, `gradle`, ...) are ignored.

use super::{Dependency, ResolutionStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Dependencies reported under one status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyList {
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl DependencyList {
    /// Creates a list from dependencies
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self { dependencies }
    }
}

/// The four ordered dependency sequences produced by the resolver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraph {
    #[serde(default)]
    pub current: DependencyList,
    #[serde(default)]
    pub exceeded: DependencyList,
    #[serde(default)]
    pub outdated: DependencyList,
    #[serde(default)]
    pub unresolved: DependencyList,
}

impl DependencyGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dependency under the given status (builder pattern)
    pub fn with(mut self, status: ResolutionStatus, dependency: Dependency) -> Self {
        self.list_mut(status).dependencies.push(dependency);
        self
    }

    /// Returns the list for a status
    pub fn list(&self, status: ResolutionStatus) -> &DependencyList {
        match status {
            ResolutionStatus::Current => &self.current,
            ResolutionStatus::Exceeded => &self.exceeded,
            ResolutionStatus::Outdated => &self.outdated,
            ResolutionStatus::Unresolved => &self.unresolved,
        }
    }

    fn list_mut(&mut self, status: ResolutionStatus) -> &mut DependencyList {
        match status {
            ResolutionStatus::Current => &mut self.current,
            ResolutionStatus::Exceeded => &mut self.exceeded,
            ResolutionStatus::Outdated => &mut self.outdated,
            ResolutionStatus::Unresolved => &mut self.unresolved,
        }
    }

    /// Total number of reported dependencies, duplicates included
    pub fn len(&self) -> usize {
        ResolutionStatus::all()
            .iter()
            .map(|s| self.list(*s).dependencies.len())
            .sum()
    }

    /// Returns true if no dependency was reported
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenates current, exceeded, outdated and unresolved in that order
    ///
    /// Literal duplicates (same `group:name:version`) are merged, the first
    /// occurrence wins.
    pub fn concat(&self) -> Vec<Dependency> {
        let mut seen = HashSet::new();
        let mut all = Vec::with_capacity(self.len());

        for status in ResolutionStatus::all() {
            for dep in &self.list(*status).dependencies {
                if seen.insert(dep.coordinate()) {
                    all.push(dep.clone());
                } else {
                    debug!("Dropping duplicate {} reported as {}", dep, status);
                }
            }
        }

        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_order() {
        let graph = DependencyGraph::new()
            .with(ResolutionStatus::Unresolved, Dependency::new("d", "d", "1"))
            .with(ResolutionStatus::Current, Dependency::new("a", "a", "1"))
            .with(ResolutionStatus::Outdated, Dependency::new("c", "c", "1"))
            .with(ResolutionStatus::Exceeded, Dependency::new("b", "b", "1"));

        let groups: Vec<_> = graph.concat().into_iter().map(|d| d.group).collect();
        assert_eq!(groups, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_concat_merges_literal_duplicates() {
        let graph = DependencyGraph::new()
            .with(ResolutionStatus::Current, Dependency::new("g", "n", "1.0"))
            .with(
                ResolutionStatus::Outdated,
                Dependency::new("g", "n", "1.0").with_project_url("https://example.com"),
            )
            .with(ResolutionStatus::Outdated, Dependency::new("g", "n", "2.0"));

        let all = graph.concat();
        assert_eq!(graph.len(), 3);
        assert_eq!(all.len(), 2);
        assert!(all[0].project_url.is_none());
        assert_eq!(all[1].version, "2.0");
    }

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::new();
        assert!(graph.is_empty());
        assert!(graph.concat().is_empty());
    }

    #[test]
    fn test_deserialize_versions_plugin_report() {
        let json = r#"{
            "current": {
                "dependencies": [
                    {"group": "junit", "name": "junit", "version": "4.13.2", "projectUrl": "http://junit.org"}
                ],
                "count": 1
            },
            "exceeded": {"dependencies": [], "count": 0},
            "outdated": {
                "dependencies": [
                    {
                        "group": "io.ktor",
                        "name": "ktor-server-core",
                        "version": "2.0.0",
                        "available": {"release": "2.3.7", "milestone": null, "integration": null}
                    }
                ],
                "count": 1
            },
            "unresolved": {"dependencies": [], "count": 0},
            "count": 2,
            "gradle": {"enabled": true}
        }"#;

        let graph: DependencyGraph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.current.dependencies[0].name, "junit");
        assert_eq!(
            graph.outdated.dependencies[0]
                .available
                .as_ref()
                .and_then(|a| a.newer_version()),
            Some("2.3.7")
        );
    }

    #[test]
    fn test_deserialize_missing_sections() {
        let graph: DependencyGraph = serde_json::from_str(r#"{"current": {}}"#).unwrap();
        assert!(graph.is_empty());
    }
}
