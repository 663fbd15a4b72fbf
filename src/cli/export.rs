//! Export command for writing a design system in tool-specific formats.

use crate::cli::common::{CliError, CliResult};
use crate::cli::generate::SystemArgs;
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::models::{ColorRole, DesignSystem};
use crate::services::OutputService;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Format selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// figma-variables.json
    Figma,
    /// design-system.css
    Css,
    /// tailwind.config.js
    Tailwind,
    /// variables.scss
    Scss,
    /// tokens.json
    Tokens,
    /// Every format
    All,
}

impl FormatArg {
    /// Export formats selected by this argument.
    #[must_use]
    pub fn formats(self) -> Vec<ExportFormat> {
        match self {
            Self::Figma => vec![ExportFormat::Figma],
            Self::Css => vec![ExportFormat::Css],
            Self::Tailwind => vec![ExportFormat::Tailwind],
            Self::Scss => vec![ExportFormat::Scss],
            Self::Tokens => vec![ExportFormat::Tokens],
            Self::All => ExportFormat::ALL.to_vec(),
        }
    }
}

/// Export a design system to Figma, CSS, Tailwind, SCSS or token files
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: FormatArg,

    #[command(flatten)]
    pub system: SystemArgs,

    /// Comma-separated spacing scale (e.g. 4px,8px,16px)
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub spacing: Option<Vec<String>>,

    /// Comma-separated border radius scale (e.g. 0,4px,9999px)
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub radius: Option<Vec<String>>,

    /// Regenerate a color role after generation (repeatable)
    #[arg(long, value_name = "ROLE")]
    pub shuffle_role: Vec<String>,

    /// Write files into DIR instead of printing
    #[arg(short, long, value_name = "DIR", conflicts_with = "save")]
    pub out_dir: Option<PathBuf>,

    /// Write files into the configured output directory
    #[arg(long)]
    pub save: bool,

    /// Copy the exported text to the clipboard instead of printing
    #[arg(long)]
    pub copy: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        let system = self.build_system(&config)?;
        let formats = self.format.formats();

        let out_dir = match (&self.out_dir, self.save) {
            (Some(dir), _) => Some(dir.clone()),
            (None, true) => Some(config.export.output_dir.clone()),
            (None, false) => None,
        };

        if let Some(dir) = out_dir {
            for format in &formats {
                let content = export::export(*format, &system);
                let path = OutputService::write_export(&dir, *format, &content)
                    .map_err(|e| CliError::io(format!("Failed to write {format}: {e:#}")))?;
                println!("✓ Exported {format} to: {}", path.display());
            }
        }

        let text = render(&formats, &system);

        if self.copy {
            OutputService::copy_to_clipboard(&text);
            let labels: Vec<&str> = formats.iter().map(|f| f.label()).collect();
            println!("✓ Copied {} to clipboard", labels.join(", "));
        } else if self.out_dir.is_none() && !self.save {
            print!("{text}");
        }

        Ok(())
    }

    /// Generates the design system and applies the patch flags.
    fn build_system(&self, config: &Config) -> CliResult<DesignSystem> {
        let (mut system, mut rng) = self.system.build(config)?;

        if let Some(spacing) = &self.spacing {
            system
                .set_spacing(spacing.as_slice())
                .map_err(|e| CliError::validation(format!("Invalid --spacing: {e}")))?;
        }

        if let Some(radius) = &self.radius {
            system
                .set_border_radius(radius.as_slice())
                .map_err(|e| CliError::validation(format!("Invalid --radius: {e}")))?;
        }

        for name in &self.shuffle_role {
            let role: ColorRole = name
                .parse()
                .map_err(|e| CliError::validation(format!("Invalid --shuffle-role: {e}")))?;
            system.shuffle_role(role, &mut rng);
            info!("Shuffled {role} colors");
        }

        Ok(system)
    }
}

/// Export text for `formats`; several formats get a file name banner each.
fn render(formats: &[ExportFormat], system: &DesignSystem) -> String {
    if let [format] = formats {
        return export::export(*format, system);
    }

    formats
        .iter()
        .map(|format| {
            format!(
                "==> {} <==\n{}",
                format.file_name(),
                export::export(*format, system)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
