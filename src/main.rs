//! TokenForge - design system generator
//!
//! Generates color palettes and token scales, exports them for design and
//! frontend tooling, and produces UI component snippets.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tokenforge::cli::{
    CliResult, ComponentArgs, ConfigArgs, ExitCode, ExportArgs, FontsArgs, GenerateArgs,
    PaletteArgs,
};
use tokenforge::constants::APP_BINARY_NAME;

/// TokenForge - generate, export and preview design systems
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random design system and print a summary
    Generate(GenerateArgs),
    /// Show a shade ramp or a random palette
    Palette(PaletteArgs),
    /// Export a design system to tool-specific formats
    Export(ExportArgs),
    /// Generate UI component code
    Component(ComponentArgs),
    /// List the available font families
    Fonts(FontsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Palette(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Component(args) => args.execute(),
            Self::Fonts(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::ValidationError
            } else {
                ExitCode::Success
            };
            std::process::exit(code.code());
        }
    };

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}
