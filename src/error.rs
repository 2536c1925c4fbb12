//! Application error types using thiserror
//!
//! Error hierarchy:
//! - NamingError: Input that cannot be turned into unique identifiers
//! - InputError: Issues reading or parsing the dependency report
//! - ConfigError: Issues with the configuration file or CLI configuration
//! - OutputError: Failures writing generated output

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Identifier resolution errors
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// Dependency report related errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output related errors
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors raised by the naming pipeline
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NamingError {
    /// Group or name sanitizes to an empty identifier
    #[error("dependency '{coordinate}' yields an empty identifier")]
    EmptyIdentifier { coordinate: String },

    /// Two dependencies resolved to the same identifier
    #[error("identifier '{identifier}' is claimed by both '{first}' and '{second}'")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },
}

/// Errors related to the dependency report
#[derive(Error, Debug)]
pub enum InputError {
    /// Report file not found
    #[error("dependency report not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read report file
    #[error("failed to read dependency report {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read configuration file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// Name that cannot be used as an identifier
    #[error("invalid identifier '{value}' in useFdqnByDefault")]
    InvalidIdentifier { value: String },
}

/// Errors related to writing output
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write output file
    #[error("failed to write output {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NamingError {
    /// Creates a new EmptyIdentifier error
    pub fn empty_identifier(coordinate: impl Into<String>) -> Self {
        NamingError::EmptyIdentifier {
            coordinate: coordinate.into(),
        }
    }

    /// Creates a new DuplicateIdentifier error
    pub fn duplicate_identifier(
        identifier: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        NamingError::DuplicateIdentifier {
            identifier: identifier.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

impl InputError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        InputError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        InputError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl OutputError {
    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::WriteError {
            path: path.into(),
            source,
        }
    }
}
