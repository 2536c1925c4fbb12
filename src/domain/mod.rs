//! Core domain models for depconst
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency records with their coordinates and computed identifiers
//! - Resolution status categories
//! - The dependency graph handed over by the build tool

mod dependency;
mod graph;
mod status;

pub use dependency::{AvailableUpdate, Dependency, NO_VERSION};
pub use graph::{DependencyGraph, DependencyList};
pub use status::ResolutionStatus;
