//! depconst - Dependency constant generator library
//!
//! This library turns a dependency report into named constants:
//! - One library constant per dependency, short when unambiguous
//! - One version constant per distinct version, shared across lockstep groups
//! - Deterministic output for Kotlin, JSON and text

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod report;
