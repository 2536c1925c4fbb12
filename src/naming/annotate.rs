//! Documentation annotator
//!
//! Computes the comment rendered next to each version constant and where
//! it goes.

use crate::domain::{Dependency, NO_VERSION};
use serde::Serialize;

/// Above this many characters (comment + name + version) the comment gets
/// its own line
pub const INLINE_COMMENT_LIMIT: usize = 70;

/// Note attached to artifacts without a version
pub const NO_VERSION_NOTE: &str =
    "// No version applicable, the coordinate is emitted without one";

/// Where a comment is rendered relative to its entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// After the entry on the same line
    Trailing,
    /// On its own line before the entry
    Leading,
}

/// Comment for a version entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Comment text, empty when there is nothing to say
    pub comment: String,
    /// Layout of the comment
    pub placement: Placement,
}

impl Annotation {
    /// Returns true if there is no comment
    pub fn is_empty(&self) -> bool {
        self.comment.is_empty()
    }
}

/// Builds the annotation for a dependency's version entry
pub fn annotate(dependency: &Dependency) -> Annotation {
    let comment = if dependency.version == NO_VERSION {
        NO_VERSION_NOTE.to_string()
    } else {
        match &dependency.available {
            None => String::new(),
            Some(update) => match update.newer_version() {
                Some(newer) => format!("// available: \"{}\"", newer),
                None => format!("// {}", update),
            },
        }
    };

    let width = comment.chars().count()
        + dependency.version_name.chars().count()
        + dependency.version.chars().count();
    let placement = if width > INLINE_COMMENT_LIMIT {
        Placement::Leading
    } else {
        Placement::Trailing
    };

    Annotation { comment, placement }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AvailableUpdate;

    fn named(mut dep: Dependency, version_name: &str) -> Dependency {
        dep.escaped_name = version_name.to_string();
        dep.version_name = version_name.to_string();
        dep
    }

    #[test]
    fn test_no_update_is_empty() {
        let ann = annotate(&named(Dependency::new("junit", "junit", "4.13.2"), "junit"));
        assert!(ann.is_empty());
        assert_eq!(ann.placement, Placement::Trailing);
    }

    #[test]
    fn test_no_version_note() {
        let ann = annotate(&named(Dependency::new("g", "marker", NO_VERSION), "marker"));
        assert_eq!(ann.comment, NO_VERSION_NOTE);
        assert_ne!(ann.comment, "");
    }

    #[test]
    fn test_no_version_note_wins_over_update() {
        let dep = Dependency::new("g", "m", NO_VERSION).with_available(AvailableUpdate::release("1"));
        assert_eq!(annotate(&named(dep, "m")).comment, NO_VERSION_NOTE);
    }

    #[test]
    fn test_release_hint() {
        let dep = Dependency::new("com.squareup.okhttp3", "okhttp", "4.9.0")
            .with_available(AvailableUpdate::release("4.12.0"));
        let ann = annotate(&named(dep, "okhttp"));
        assert_eq!(ann.comment, "// available: \"4.12.0\"");
        assert_eq!(ann.placement, Placement::Trailing);
    }

    #[test]
    fn test_milestone_then_integration() {
        let dep = Dependency::new("g", "n", "1.0").with_available(AvailableUpdate {
            release: Some(String::new()),
            milestone: None,
            integration: Some("2.0-SNAPSHOT".to_string()),
        });
        assert_eq!(
            annotate(&named(dep, "n")).comment,
            "// available: \"2.0-SNAPSHOT\""
        );

        let dep = Dependency::new("g", "n", "1.0").with_available(AvailableUpdate {
            release: None,
            milestone: Some("2.0-M1".to_string()),
            integration: Some("2.0-SNAPSHOT".to_string()),
        });
        assert_eq!(annotate(&named(dep, "n")).comment, "// available: \"2.0-M1\"");
    }

    #[test]
    fn test_generic_fallback() {
        let dep = Dependency::new("g", "n", "1.0").with_available(AvailableUpdate::default());
        assert_eq!(
            annotate(&named(dep, "n")).comment,
            "// AvailableUpdate(release=null, milestone=null, integration=null)"
        );
    }

    #[test]
    fn test_long_comment_is_leading() {
        let dep = Dependency::new("org.jetbrains.kotlinx", "kotlinx-coroutines-core", "1.6.4")
            .with_available(AvailableUpdate::release("1.7.3"));
        // 21 + 45 + 5 = 71
        let ann = annotate(&named(dep, "org_jetbrains_kotlinx_kotlinx_coroutines_core"));
        assert_eq!(ann.placement, Placement::Leading);
    }

    #[test]
    fn test_limit_is_exclusive() {
        // comment is 17 chars, version 1 char, name 52 chars: 70 total
        let name = "a".repeat(52);
        let dep = Dependency::new("g", "n", "1").with_available(AvailableUpdate::release("1"));
        let ann = annotate(&named(dep.clone(), &name));
        assert_eq!(ann.placement, Placement::Trailing);

        let longer = "a".repeat(53);
        assert_eq!(annotate(&named(dep, &longer)).placement, Placement::Leading);
    }
}
