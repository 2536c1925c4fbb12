//! Collision resolver
//!
//! Assigns every dependency a short identifier unless that identifier is
//! ambiguous, in which case all dependencies sharing it fall back to the
//! fully-qualified `group_name` form.

use super::escape::{fdqn_identifier, short_identifier};
use crate::domain::Dependency;
use crate::error::NamingError;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// State of a short identifier during the pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShortKey {
    /// Held by the dependency at this index
    Owned(usize),
    /// Seen at least twice; never handed out again
    Contested,
}

/// Assigns `escaped_name` (and mirrors it into `version_name`)
///
/// A single pass in list order. When a short identifier is claimed a second
/// time, the earlier owner is rewritten in place through its index so both
/// end up fully-qualified, and the key stays contested for any later claimant.
pub fn resolve_identifiers(
    dependencies: &mut [Dependency],
    use_fdqn_by_default: &BTreeSet<String>,
) -> Result<(), NamingError> {
    let mut owners: HashMap<String, ShortKey> = HashMap::new();

    for index in 0..dependencies.len() {
        let dep = &dependencies[index];
        let short = short_identifier(&dep.name);
        if short.is_empty() || dep.group.is_empty() {
            return Err(NamingError::empty_identifier(dep.coordinate()));
        }
        let fdqn = fdqn_identifier(&dep.group, &dep.name);

        let escaped = if use_fdqn_by_default.contains(&short) {
            fdqn
        } else {
            match owners.get(&short).copied() {
                Some(ShortKey::Owned(owner)) => {
                    let previous = &mut dependencies[owner];
                    previous.escaped_name = fdqn_identifier(&previous.group, &previous.name);
                    previous.version_name = previous.escaped_name.clone();
                    debug!(
                        "'{}' is ambiguous, renamed {} to {}",
                        short, previous, previous.escaped_name
                    );
                    owners.insert(short, ShortKey::Contested);
                    fdqn
                }
                Some(ShortKey::Contested) => fdqn,
                None => {
                    owners.insert(short.clone(), ShortKey::Owned(index));
                    short
                }
            }
        };

        let dep = &mut dependencies[index];
        dep.version_name = escaped.clone();
        dep.escaped_name = escaped;
    }

    Ok(())
}

/// Checks that no two dependencies share an `escaped_name`
pub fn ensure_unique(dependencies: &[Dependency]) -> Result<(), NamingError> {
    let mut seen: HashMap<&str, &Dependency> = HashMap::new();

    for dep in dependencies {
        if let Some(first) = seen.insert(&dep.escaped_name, dep) {
            return Err(NamingError::duplicate_identifier(
                &dep.escaped_name,
                first.coordinate(),
                dep.coordinate(),
            ));
        }
    }

    Ok(())
}
