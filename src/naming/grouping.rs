//! Version grouping engine
//!
//! Artifacts of one group released in lockstep share a single version
//! constant named after the group. As soon as one member diverges, the whole
//! group falls back to per-dependency version constants.

use super::escape::escape;
use crate::domain::Dependency;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Rewrites `version_name` for groups whose members all share one version
///
/// Expects `escaped_name` to be resolved already. Returns the groups that
/// were collapsed.
pub fn group_versions(dependencies: &mut [Dependency]) -> BTreeSet<String> {
    let mut collapsed = lockstep_groups(dependencies);

    loop {
        assign_version_names(dependencies, &collapsed);

        let clashing = clashing_groups(dependencies, &collapsed);
        if clashing.is_empty() {
            break;
        }
        for group in clashing {
            warn!(
                "Version name '{}' is taken by another version, keeping individual names for group {}",
                escape(&group),
                group
            );
            collapsed.remove(&group);
        }
    }

    collapsed
}

/// Groups with more than one member, all on the same version
fn lockstep_groups(dependencies: &[Dependency]) -> BTreeSet<String> {
    let mut partitions: BTreeMap<&str, Vec<&Dependency>> = BTreeMap::new();
    for dep in dependencies {
        partitions.entry(dep.group.as_str()).or_default().push(dep);
    }

    partitions
        .into_iter()
        .filter(|(_, members)| {
            members.len() > 1 && members.iter().all(|m| m.version == members[0].version)
        })
        .map(|(group, members)| {
            debug!(
                "Group {} shares version {} across {} artifacts",
                group,
                members[0].version,
                members.len()
            );
            group.to_string()
        })
        .collect()
}

fn assign_version_names(dependencies: &mut [Dependency], collapsed: &BTreeSet<String>) {
    for dep in dependencies.iter_mut() {
        dep.version_name = if collapsed.contains(&dep.group) {
            escape(&dep.group)
        } else {
            dep.escaped_name.clone()
        };
    }
}

/// Collapsed groups whose shared name is bound to more than one version
fn clashing_groups(dependencies: &[Dependency], collapsed: &BTreeSet<String>) -> Vec<String> {
    let mut versions: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for dep in dependencies {
        versions
            .entry(dep.version_name.as_str())
            .or_default()
            .insert(dep.version.as_str());
    }

    collapsed
        .iter()
        .filter(|group| {
            versions
                .get(escape(group).as_str())
                .is_some_and(|bound| bound.len() > 1)
        })
        .cloned()
        .collect()
}
