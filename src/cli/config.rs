//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::services::fonts;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory used by `export --save`
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Font family used instead of a random pick
    #[arg(long, value_name = "FONT")]
    default_font: Option<String>,

    /// Seed used when `--seed` is omitted
    #[arg(long, value_name = "N", conflicts_with = "clear_seed")]
    seed: Option<u64>,

    /// Remove the stored seed
    #[arg(long)]
    clear_seed: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    export: ExportOutput,
    generator: GeneratorOutput,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    output_dir: String,
}

#[derive(Serialize, Debug)]
struct GeneratorOutput {
    default_font: Option<String>,
    seed: Option<u64>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let config_file = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))?;

        let output = ConfigOutput {
            config_file: config_file.to_string_lossy().to_string(),
            export: ExportOutput {
                output_dir: config.export.output_dir.to_string_lossy().to_string(),
            },
            generator: GeneratorOutput {
                default_font: config.default_font().map(ToString::to_string),
                seed: config.generator.seed,
            },
        };

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.output_dir.is_none()
            && self.default_font.is_none()
            && self.seed.is_none()
            && !self.clear_seed
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --output-dir, --default-font, --seed, or --clear-seed",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    path.display()
                ))
            })?;
            config.export.output_dir.clone_from(path);
        }

        if let Some(name) = &self.default_font {
            let font = fonts::find_font(name).ok_or_else(|| {
                CliError::validation(format!(
                    "Unknown font '{name}'. Run `fonts` to list the available families"
                ))
            })?;
            config.generator.default_font = Some(font.to_string());
        }

        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        if self.clear_seed {
            config.generator.seed = None;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("{APP_NAME} Configuration");
    println!("======================");
    println!();
    println!("File: {}", output.config_file);
    println!();

    println!("Export:");
    println!("  Output Directory: {}", output.export.output_dir);
    println!();

    println!("Generator:");
    println!(
        "  Default Font: {}",
        output
            .generator
            .default_font
            .as_deref()
            .unwrap_or("(random)")
    );
    match output.generator.seed {
        Some(seed) => println!("  Seed: {seed}"),
        None => println!("  Seed: (random)"),
    }
}
