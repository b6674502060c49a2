//! Command-line argument definitions
//!
//! This module defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::color::ColorModel;

/// Convert colors between hex, RGB, HSL and CMYK
#[derive(Parser, Debug)]
#[command(name = "color-convert")]
#[command(version)]
#[command(about = "Convert colors between hex, RGB, HSL and CMYK", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Require the leading '#' on hex input (overrides config)
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format: text or json (overrides config)
    #[arg(short, long, global = true, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Print hex results in uppercase (overrides config)
    #[arg(short, long, global = true)]
    pub uppercase: bool,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a color to another model
    ///
    /// COLOR is a hex string (#abc, #aabbcc, aabbcc) or one of
    /// rgb(r, g, b), hsl(h, s%, l%), cmyk(c%, m%, y%, k%).
    Convert {
        /// Color to convert
        color: String,

        /// Target model: hex, rgb, hsl or cmyk
        #[arg(short, long, value_name = "MODEL")]
        to: ColorModel,
    },

    /// Show a color in every model
    Inspect {
        /// Color to inspect
        color: String,
    },

    /// Check whether a string is a valid hex color
    ///
    /// Exits with status 1 when the input is rejected.
    Validate {
        /// Hex string to check
        hex: String,
    },

    /// Open the configuration file in your default editor
    ///
    /// If no config file exists, a default one will be created.
    Config {
        /// Show the config file path without opening it
        #[arg(long)]
        path: bool,

        /// Reset config to defaults (creates a fresh config file)
        #[arg(long)]
        reset: bool,
    },

    /// Generate a configuration file at a specific location
    GenerateConfig {
        /// Output path for the config file (defaults to standard location)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration
    ShowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let args = Args::parse_from(["color-convert", "convert", "#abc", "--to", "hsl"]);
        match args.command {
            Commands::Convert { color, to } => {
                assert_eq!(color, "#abc");
                assert_eq!(to, ColorModel::Hsl);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from([
            "color-convert",
            "inspect",
            "rgb(1, 2, 3)",
            "--strict",
            "--format",
            "json",
            "-u",
        ]);
        assert!(args.strict);
        assert!(args.uppercase);
        assert_eq!(args.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_rejects_unknown_model() {
        let result = Args::try_parse_from(["color-convert", "convert", "#abc", "--to", "lab"]);
        assert!(result.is_err());
    }
}
