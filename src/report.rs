//! Dependency report loading

use crate::domain::DependencyGraph;
use crate::error::InputError;
use std::path::Path;
use tracing::info;

/// Parse a dependency report from JSON text
pub fn parse_report(content: &str, path: &Path) -> Result<DependencyGraph, InputError> {
    serde_json::from_str(content).map_err(|e| InputError::json_parse_error(path, e.to_string()))
}

/// Read and parse a dependency report file
pub fn load_report(path: &Path) -> Result<DependencyGraph, InputError> {
    if !path.exists() {
        return Err(InputError::not_found(path));
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::read_error(path, e))?;
    let graph = parse_report(&content, path)?;
    info!(
        "Loaded {} dependencies from {}",
        graph.len(),
        path.display()
    );
    Ok(graph)
}
