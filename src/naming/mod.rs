//! Naming and grouping of dependency constants
//!
//! This module provides:
//! - Identifier sanitizing for coordinate strings
//! - Collision resolution between short and fully-qualified identifiers
//! - Canonical ordering of dependencies
//! - Version grouping for artifacts released in lockstep
//! - Comments for generated version entries

mod annotate;
mod collision;
mod escape;
mod grouping;
mod ordering;

pub use annotate::{annotate, Annotation, Placement, INLINE_COMMENT_LIMIT, NO_VERSION_NOTE};
pub use collision::{ensure_unique, resolve_identifiers};
pub use escape::{escape, fdqn_identifier, short_identifier};
pub use grouping::group_versions;
pub use ordering::sort_dependencies;
