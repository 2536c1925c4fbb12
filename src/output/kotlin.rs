//! Kotlin source formatter
//!
//! Renders two objects:
//! - `Versions`, one `const val` per distinct version name
//! - `Libs`, one `const val` per dependency, referencing its version constant
//!
//! The output contains no timestamps so regenerating an unchanged graph
//! yields identical bytes.

use crate::naming::{Annotation, Placement};
use crate::output::OutputFormatter;
use crate::pipeline::{Resolution, ResolvedDependency};
use regex::Regex;
use std::io::Write;
use std::sync::LazyLock;

const INDENT: &str = "    ";

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

// Hard keywords cannot be used as names without backticks
const KOTLIN_KEYWORDS: [&str; 21] = [
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
];

/// Returns true if `name` can be used as a bare Kotlin identifier
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name) && !KOTLIN_KEYWORDS.contains(&name) && name != "_"
}

fn identifier(name: &str) -> String {
    if is_valid_identifier(name) {
        name.to_string()
    } else {
        format!("`{}`", name)
    }
}

fn string_literal(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$");
    format!("\"{}\"", escaped)
}

/// Formatter producing Kotlin constants
#[derive(Debug, Clone, Default)]
pub struct KotlinFormatter;

impl KotlinFormatter {
    /// Create a new Kotlin formatter
    pub fn new() -> Self {
        Self
    }

    fn write_header(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "/**")?;
        writeln!(writer, " * Generated by depconst. Do not edit by hand.")?;
        writeln!(writer, " */")
    }

    fn write_versions(
        &self,
        resolution: &Resolution,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "object Versions {{")?;
        for entry in resolution.versions() {
            let line = format!(
                "const val {}: String = {}",
                identifier(entry.name),
                string_literal(entry.version)
            );
            self.write_annotated(&line, entry.annotation, writer)?;
        }
        writeln!(writer, "}}")
    }

    fn write_annotated(
        &self,
        line: &str,
        annotation: &Annotation,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if annotation.is_empty() {
            return writeln!(writer, "{}{}", INDENT, line);
        }
        match annotation.placement {
            Placement::Trailing => writeln!(writer, "{}{} {}", INDENT, line, annotation.comment),
            Placement::Leading => {
                writeln!(writer)?;
                writeln!(writer, "{}{}", INDENT, annotation.comment)?;
                writeln!(writer, "{}{}", INDENT, line)
            }
        }
    }

    fn library_value(resolved: &ResolvedDependency) -> String {
        let dep = &resolved.dependency;
        if dep.has_no_version() {
            string_literal(&dep.module())
        } else {
            format!(
                "{} + Versions.{}",
                string_literal(&format!("{}:", dep.module())),
                identifier(&dep.version_name)
            )
        }
    }

    fn write_libs(&self, resolution: &Resolution, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "object Libs {{")?;
        for (index, resolved) in resolution.iter().enumerate() {
            if let Some(url) = &resolved.dependency.project_url {
                if index > 0 {
                    writeln!(writer)?;
                }
                writeln!(writer, "{}/**", INDENT)?;
                writeln!(writer, "{} * {}", INDENT, url)?;
                writeln!(writer, "{} */", INDENT)?;
            }
            writeln!(
                writer,
                "{}const val {}: String = {}",
                INDENT,
                identifier(&resolved.dependency.escaped_name),
                Self::library_value(resolved)
            )?;
        }
        writeln!(writer, "}}")
    }
}

impl OutputFormatter for KotlinFormatter {
    fn format(&self, resolution: &Resolution, writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_header(writer)?;
        self.write_versions(resolution, writer)?;
        writeln!(writer)?;
        self.write_libs(resolution, writer)
    }
}
