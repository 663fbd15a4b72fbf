//! Generate command for creating a fresh design system.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{DesignSystem, ShadeStep};
use crate::services::fonts;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::IsTerminal;
use tracing::debug;

/// Options shared by every command that builds a design system.
#[derive(Debug, Clone, Default, Args)]
pub struct SystemArgs {
    /// Seed for reproducible output (falls back to the configured seed)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Design system name (defaults to "Design System <n>")
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Font family, by family name or full stack (see `fonts`)
    #[arg(long, value_name = "FONT")]
    pub font: Option<String>,
}

impl SystemArgs {
    /// Builds the design system described by the flags and configuration.
    ///
    /// Returns the random generator too, so callers can keep drawing from the
    /// same seeded stream (for example to shuffle a role afterwards).
    pub fn build(&self, config: &Config) -> CliResult<(DesignSystem, StdRng)> {
        let font = match &self.font {
            Some(name) => Some(fonts::find_font(name).ok_or_else(|| {
                CliError::validation(format!(
                    "Unknown font '{name}'. Available: {}",
                    font_names().join(", ")
                ))
            })?),
            None => config.default_font(),
        };

        let mut rng = match self.seed.or(config.generator.seed) {
            Some(seed) => {
                debug!("Using seed {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let mut system = DesignSystem::random(&mut rng);
        if let Some(name) = &self.name {
            system.set_name(name);
        }
        if let Some(font) = font {
            system.set_font_family(font);
        }

        Ok((system, rng))
    }
}

/// Family names of the fixed font list, without fallbacks.
pub(crate) fn font_names() -> Vec<&'static str> {
    fonts::FONT_FAMILIES
        .iter()
        .filter_map(|font| font.split(',').next())
        .collect()
}

/// Generate a random design system and print a summary
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub system: SystemArgs,

    /// Output the full design system as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
        let (system, _) = self.system.build(&config)?;

        if self.json {
            return print_json(&system);
        }

        let swatches = std::io::stdout().is_terminal();
        println!("{}", system.name);
        println!("  Font:    {}", system.font_family);
        println!("  Colors:");
        for (role, shade) in system.colors.iter() {
            let base = shade.get(ShadeStep::S500);
            if swatches {
                println!(
                    "    {:<10} {} {base}",
                    role.name(),
                    super::palette::swatch(base)
                );
            } else {
                println!("    {:<10} {base}", role.name());
            }
        }
        println!("  Spacing: {}", system.spacing().join(" "));
        println!("  Radius:  {}", system.border_radius().join(" "));

        Ok(())
    }
}
