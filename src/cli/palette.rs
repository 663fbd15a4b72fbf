//! Palette command for inspecting generated color ramps.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{ColorShade, Hsl};
use crate::services::palette::{generate_color_shade, generate_random_palette};
use clap::Args;
use crossterm::style::{style, StyledContent, Stylize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::IsTerminal;

/// Show a single shade ramp or a full random palette
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Base hue in degrees; prints one ten-step ramp
    #[arg(long, value_name = "H", requires = "saturation", conflicts_with = "seed",
          value_parser = clap::value_parser!(u16).range(0..360))]
    pub hue: Option<u16>,

    /// Base saturation in percent (used with --hue)
    #[arg(long, value_name = "S", requires = "hue",
          value_parser = clap::value_parser!(u8).range(0..=100))]
    pub saturation: Option<u8>,

    /// Seed for a reproducible random palette
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let swatches = std::io::stdout().is_terminal();

        if let (Some(hue), Some(saturation)) = (self.hue, self.saturation) {
            let shade = generate_color_shade(hue, saturation);
            if self.json {
                return print_json(&shade);
            }
            print_shade(&shade, swatches);
            return Ok(());
        }

        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
        let mut rng = match self.seed.or(config.generator.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let palette = generate_random_palette(&mut rng);

        if self.json {
            return print_json(&palette);
        }

        for (role, shade) in palette.iter() {
            println!("{role}");
            print_shade(shade, swatches);
        }

        Ok(())
    }
}

fn print_shade(shade: &ColorShade, swatches: bool) {
    for (step, color) in shade.iter() {
        let hex = color.to_rgb().to_hex();
        let step = step.value();
        if swatches {
            println!("  {step:>3} {} {color} {hex}", swatch(color));
        } else {
            println!("  {step:>3} {color} {hex}");
        }
    }
}

/// A small block filled with `color` for terminal output.
pub(crate) fn swatch(color: Hsl) -> StyledContent<&'static str> {
    style("    ").on(color.to_rgb().to_crossterm_color())
}
