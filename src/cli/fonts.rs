//! Fonts command for listing the selectable font families.

use crate::cli::common::{print_json, CliResult};
use crate::services::fonts::FONT_FAMILIES;
use clap::Args;

/// List the font families a design system can use
#[derive(Debug, Clone, Args)]
pub struct FontsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl FontsArgs {
    /// Execute the fonts command
    pub fn execute(&self) -> CliResult<()> {
        if self.json {
            return print_json(&FONT_FAMILIES);
        }

        for font in FONT_FAMILIES {
            println!("{font}");
        }
        Ok(())
    }
}
