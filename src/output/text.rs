//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per library constant with its version constant
//! - Newer version hints
//! - Summary with library, version and shared group counts

use crate::output::{OutputFormatter, Verbosity};
use crate::pipeline::{Resolution, ResolvedDependency};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Calculate the maximum constant name length for alignment
    fn max_name_length(&self, resolution: &Resolution) -> usize {
        resolution
            .iter()
            .map(|r| r.dependency.escaped_name.len())
            .max()
            .unwrap_or(0)
    }

    /// Format a single library line
    fn format_library_line(
        &self,
        resolved: &ResolvedDependency,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let dep = &resolved.dependency;
        let newer = dep.available.as_ref().and_then(|a| a.newer_version());
        let version_ref = if dep.has_no_version() {
            "(no version)".to_string()
        } else {
            format!("Versions.{}", dep.version_name)
        };

        if self.color {
            let name_display = format!("{:width$}", dep.escaped_name, width = max_name_len);
            let hint = newer
                .map(|v| format!(" → {}", v.green()))
                .unwrap_or_default();
            writeln!(
                writer,
                "  {} {} {}{}",
                name_display.bold(),
                dep.to_string().dimmed(),
                version_ref.cyan(),
                hint
            )
        } else {
            let hint = newer.map(|v| format!(" -> {}", v)).unwrap_or_default();
            writeln!(
                writer,
                "  {:width$} {} {}{}",
                dep.escaped_name,
                dep,
                version_ref,
                hint,
                width = max_name_len
            )
        }
    }

    /// Format the summary line
    fn format_summary(&self, resolution: &Resolution, writer: &mut dyn Write) -> std::io::Result<()> {
        let libraries = resolution.len();
        let versions = resolution.versions().len();
        let groups = resolution.collapsed_groups.len();

        let text = format!(
            "{} {}, {} version {}, {} shared {}",
            libraries,
            if libraries == 1 { "library" } else { "libraries" },
            versions,
            if versions == 1 { "constant" } else { "constants" },
            groups,
            if groups == 1 { "group" } else { "groups" }
        );

        if self.color {
            writeln!(writer, "{}", text.bold())
        } else {
            writeln!(writer, "{}", text)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, resolution: &Resolution, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            let max_name_len = self.max_name_length(resolution);
            for resolved in resolution.iter() {
                self.format_library_line(resolved, max_name_len, writer)?;
            }
            if !resolution.is_empty() {
                writeln!(writer)?;
            }
        }

        self.format_summary(resolution, writer)?;

        if self.verbosity == Verbosity::Verbose {
            for group in &resolution.collapsed_groups {
                writeln!(writer, "  shared version: {}", group)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AvailableUpdate, Dependency, DependencyGraph, ResolutionStatus};
    use crate::pipeline::Pipeline;

    fn create_test_resolution() -> Resolution {
        let graph = DependencyGraph::new()
            .with(ResolutionStatus::Current, Dependency::new("a", "core", "1.0"))
            .with(ResolutionStatus::Current, Dependency::new("b", "core", "1.0"))
            .with(ResolutionStatus::Current, Dependency::new("b", "extra", "1.0"))
            .with(
                ResolutionStatus::Outdated,
                Dependency::new("junit", "junit", "4.12")
                    .with_available(AvailableUpdate::release("4.13.2")),
            );
        Pipeline::default().run(&graph).unwrap()
    }

    fn render(verbosity: Verbosity) -> String {
        let formatter = TextFormatter::with_color(verbosity, false);
        let mut output = Vec::new();
        formatter.format(&create_test_resolution(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_text_formatter_new() {
        let formatter = TextFormatter::new(Verbosity::Normal);
        assert!(formatter.color);
    }

    #[test]
    fn test_format_text_normal() {
        let output = render(Verbosity::Normal);
        assert!(output.contains("  a_core a:core:1.0 Versions.a_core\n"));
        assert!(output.contains("  b_core b:core:1.0 Versions.b\n"));
        assert!(output.contains("  junit  junit:junit:4.12 Versions.junit -> 4.13.2\n"));
        assert!(output.contains("4 libraries, 3 version constants, 1 shared group"));
        assert!(!output.contains("shared version:"));
    }

    #[test]
    fn test_format_text_quiet() {
        let output = render(Verbosity::Quiet);
        assert_eq!(output, "4 libraries, 3 version constants, 1 shared group\n");
    }

    #[test]
    fn test_format_text_verbose() {
        let output = render(Verbosity::Verbose);
        assert!(output.contains("  shared version: b\n"));
    }

    #[test]
    fn test_format_text_empty() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let mut output = Vec::new();
        formatter.format(&Resolution::default(), &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "0 libraries, 0 version constants, 0 shared groups\n"
        );
    }
}
