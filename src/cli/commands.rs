//! Command handler implementations
//!
//! This module contains the implementation of all CLI commands.

use crate::cli::output::{
    present, render_conversion, render_inspection, render_validation, ConversionReport,
    InspectReport, ValidationReport,
};
use crate::cli::{Args, Commands};
use crate::color::{Color, ColorModel, HexColor};
use crate::core::config::{get_config_path, init_config, open_config_in_editor, Config};
use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

/// Run the command selected on the command line.
///
/// `config` already has the command-line overrides applied.
pub fn run_command(args: &Args, config: &Config) -> Result<ExitCode> {
    match &args.command {
        Commands::Convert { color, to } => convert(config, color, *to)?,
        Commands::Inspect { color } => inspect(config, color)?,
        Commands::Validate { hex } => return validate(config, hex),
        Commands::Config { path, reset } => handle_config_command(*path, *reset)?,
        Commands::GenerateConfig { output } => generate_config_file(output.clone())?,
        Commands::ShowConfig => show_config(config)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_input(config: &Config, input: &str) -> Result<Color> {
    Color::parse(input, config.hex.strict).with_context(|| format!("cannot read color {:?}", input))
}

/// Handle the `convert` command
pub fn convert(config: &Config, input: &str, target: ColorModel) -> Result<()> {
    let color = parse_input(config, input)?;
    debug!("parsed {:?} as {} color", input, color.model());

    let output = color.convert(target)?;
    let uppercase = config.output.uppercase_hex;
    let report = ConversionReport {
        input: present(color, uppercase),
        output: present(output, uppercase),
    };

    println!("{}", render_conversion(&report, config.output.format)?);
    Ok(())
}

/// Handle the `inspect` command
pub fn inspect(config: &Config, input: &str) -> Result<()> {
    let color = parse_input(config, input)?;
    let uppercase = config.output.uppercase_hex;

    let representations = color
        .all_representations()?
        .into_iter()
        .map(|c| present(c, uppercase))
        .collect();
    let report = InspectReport {
        input: present(color, uppercase),
        representations,
    };

    println!("{}", render_inspection(&report, config.output.format)?);
    Ok(())
}

/// Check hex input against the configured strictness.
pub fn validation_report(config: &Config, input: &str) -> ValidationReport {
    match HexColor::new(input, config.hex.strict) {
        Ok(hex) => {
            let hex = if config.output.uppercase_hex {
                hex.to_uppercase()
            } else {
                hex
            };
            ValidationReport {
                input: input.to_string(),
                valid: true,
                canonical: Some(hex.to_string()),
                error: None,
            }
        }
        Err(err) => {
            warn!("{}", err);
            ValidationReport {
                input: input.to_string(),
                valid: false,
                canonical: None,
                error: Some(err.to_string()),
            }
        }
    }
}

/// Handle the `validate` command, failing the exit code for rejected input
pub fn validate(config: &Config, input: &str) -> Result<ExitCode> {
    let report = validation_report(config, input);
    println!("{}", render_validation(&report, config.output.format)?);

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Handle the `config` command - open, show path, or reset the config file
pub fn handle_config_command(show_path: bool, reset: bool) -> Result<()> {
    if reset {
        if let Some(config_path) = get_config_path() {
            if config_path.exists() {
                std::fs::remove_file(&config_path)?;
                info!("Removed existing config file");
            }
        }
        let path = init_config()?;
        println!("Created fresh config file at: {}", path.display());
        return Ok(());
    }

    if show_path {
        let path = Config::get_active_config_path();
        println!("{}", path.display());
        if path.exists() {
            info!("Config file exists at: {}", path.display());
        } else {
            info!("Config file would be created at: {}", path.display());
        }
        return Ok(());
    }

    info!("Opening configuration file in default editor...");
    match open_config_in_editor() {
        Ok(path) => {
            println!("Config file: {}", path.display());
            info!("Run 'color-convert show-config' to verify your settings.");
        }
        Err(e) => {
            error!("Failed to open config file: {}", e);
            if let Some(path) = get_config_path() {
                println!("You can manually edit the config at: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Generate a configuration file at the specified or default location
pub fn generate_config_file(output: Option<PathBuf>) -> Result<()> {
    let output_path = match output {
        Some(path) => {
            std::fs::write(&path, Config::generate_default_config())
                .with_context(|| format!("failed to write {}", path.display()))?;
            path
        }
        None => init_config()?,
    };

    println!("Configuration file: {}", output_path.display());
    Ok(())
}

/// Show the current configuration settings
pub fn show_config(config: &Config) -> Result<()> {
    let config_path = Config::get_active_config_path();
    println!("# Configuration file: {}", config_path.display());
    if !config_path.exists() {
        println!("# (Using default settings - no config file found)");
    }
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
