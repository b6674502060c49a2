//! Output helpers for the CLI
//!
//! Rendering of command results as text or JSON, and the writer used when
//! logging to both the console and a file.

use serde::Serialize;
use std::io::Write;

use crate::color::Color;
use crate::core::config::OutputFormat;

/// Apply display preferences to a color before it is printed.
pub fn present(color: Color, uppercase_hex: bool) -> Color {
    match color {
        Color::Hex(hex) if uppercase_hex => Color::Hex(hex.to_uppercase()),
        other => other,
    }
}

/// Result of a `convert` command
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub input: Color,
    pub output: Color,
}

/// Result of an `inspect` command
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub input: Color,
    pub representations: Vec<Color>,
}

/// Result of a `validate` command
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn render_conversion(
    report: &ConversionReport,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.output.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

pub fn render_inspection(
    report: &InspectReport,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report
            .representations
            .iter()
            .map(|color| format!("{:<5} {}", color.model(), color))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

pub fn render_validation(
    report: &ValidationReport,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(match (&report.canonical, &report.error) {
            (Some(canonical), _) => format!("valid: {}", canonical),
            (None, Some(error)) => format!("invalid: {}", error),
            (None, None) => "invalid".to_string(),
        }),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

// ============================================================================
// Dual writer for file + console logging
// ============================================================================

/// A writer that writes to both console and file
///
/// Used for logging to both stderr and a log file simultaneously.
pub struct DualWriter {
    pub console: std::io::Stderr,
    pub file: std::fs::File,
}

impl Write for DualWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let _ = self.console.write(buf);
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let _ = self.console.flush();
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(input: &str) -> Color {
        Color::parse(input, false).unwrap()
    }

    #[test]
    fn test_present_uppercases_hex_only() {
        assert_eq!(present(color("#aabbcc"), true).to_string(), "#AABBCC");
        assert_eq!(present(color("#aabbcc"), false).to_string(), "#aabbcc");
        assert_eq!(present(color("rgb(1, 2, 3)"), true).to_string(), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_render_conversion_text() {
        let report = ConversionReport {
            input: color("hsl(25, 95%, 53%)"),
            output: color("#f97415"),
        };
        assert_eq!(render_conversion(&report, OutputFormat::Text).unwrap(), "#f97415");
    }

    #[test]
    fn test_render_conversion_json() {
        let report = ConversionReport {
            input: color("#ff0000"),
            output: color("cmyk(0, 100, 100, 0)"),
        };
        let json = render_conversion(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"]["value"], "#ff0000");
        assert_eq!(value["output"]["model"], "cmyk");
        assert_eq!(value["output"]["value"]["magenta"], 100);
    }

    #[test]
    fn test_render_inspection_text() {
        let input = color("#ff0000");
        let report = InspectReport {
            representations: input.all_representations().unwrap(),
            input,
        };
        let text = render_inspection(&report, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "hex   #ff0000",
                "rgb   rgb(255, 0, 0)",
                "hsl   hsl(0, 100%, 50%)",
                "cmyk  cmyk(0%, 100%, 100%, 0%)",
            ]
        );
    }

    #[test]
    fn test_render_validation() {
        let valid = ValidationReport {
            input: "abc".to_string(),
            valid: true,
            canonical: Some("#aabbcc".to_string()),
            error: None,
        };
        assert_eq!(render_validation(&valid, OutputFormat::Text).unwrap(), "valid: #aabbcc");

        let json = render_validation(&valid, OutputFormat::Json).unwrap();
        assert!(!json.contains("error"));

        let invalid = ValidationReport {
            input: "abx".to_string(),
            valid: false,
            canonical: None,
            error: Some("bad".to_string()),
        };
        assert_eq!(render_validation(&invalid, OutputFormat::Text).unwrap(), "invalid: bad");
    }
}
