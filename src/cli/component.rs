//! Component command for generating UI component snippets.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::components::{render_preview, ComponentWorkbench};
use crate::models::{ComponentConfig, ComponentKind};
use crate::services::OutputService;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Generate component code from a variant, size, text and props
#[derive(Debug, Clone, Args)]
pub struct ComponentArgs {
    /// Component type (button, card, input, badge, alert)
    #[arg(short, long, value_name = "TYPE", required_unless_present = "from")]
    pub kind: Option<String>,

    /// Load the configuration from a JSON file instead of flags
    #[arg(long, value_name = "FILE", conflicts_with = "kind")]
    pub from: Option<PathBuf>,

    /// Style variant (defaults to the first one of the type)
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Size (sm, md, lg)
    #[arg(long, value_name = "SIZE")]
    pub size: Option<String>,

    /// Text content (placeholder for inputs)
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Enable a prop (repeatable)
    #[arg(long = "prop", value_name = "NAME")]
    pub props: Vec<String>,

    /// Generate one snippet per variant of the type
    #[arg(long, conflicts_with = "variant")]
    pub all_variants: bool,

    /// Also print an HTML preview
    #[arg(long)]
    pub preview: bool,

    /// Output configuration, code and preview as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the generated code to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// JSON output for one generated component
#[derive(Serialize, Debug)]
struct ComponentOutput<'a> {
    config: &'a ComponentConfig,
    code: &'a str,
    preview: String,
}

impl ComponentArgs {
    /// Execute the component command
    pub fn execute(&self) -> CliResult<()> {
        let base = self.build_config()?;

        let mut workbench = ComponentWorkbench::new();
        if self.all_variants {
            for variant in base.kind().template().variants {
                let mut config = base.clone();
                config
                    .set_variant(variant)
                    .map_err(|e| CliError::validation(e.to_string()))?;
                workbench.generate(&config);
            }
        } else {
            workbench.generate(&base);
        }

        if self.json {
            let output: Vec<ComponentOutput<'_>> = workbench
                .generated()
                .iter()
                .map(|generated| ComponentOutput {
                    config: &generated.config,
                    code: &generated.code,
                    preview: render_preview(&generated.config).to_html(),
                })
                .collect();
            return print_json(&output);
        }

        let code = workbench.combined_code();
        println!("{code}");

        if self.preview {
            println!();
            for generated in workbench.generated() {
                println!("{}", render_preview(&generated.config).to_html());
            }
        }

        if self.copy {
            OutputService::copy_to_clipboard(&code);
            println!("✓ Copied to clipboard");
        }

        Ok(())
    }

    /// Builds the configuration from `--from` or the flags, then applies
    /// the override flags.
    fn build_config(&self) -> CliResult<ComponentConfig> {
        let mut config = match (&self.from, &self.kind) {
            (Some(path), _) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    CliError::io(format!("Failed to read {}: {e}", path.display()))
                })?;
                serde_json::from_str(&content).map_err(|e| {
                    CliError::validation(format!("Invalid component file {}: {e}", path.display()))
                })?
            }
            (None, Some(kind)) => {
                let kind: ComponentKind = kind
                    .parse()
                    .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;
                ComponentConfig::new(kind)
            }
            (None, None) => {
                return Err(CliError::validation(
                    "Either --kind or --from must be specified",
                ))
            }
        };

        if let Some(variant) = &self.variant {
            config
                .set_variant(variant)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(size) = &self.size {
            config
                .set_size(size)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(text) = &self.text {
            config.set_text(text);
        }
        for prop in &self.props {
            config
                .set_prop(prop, true)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(kind: &str) -> ComponentArgs {
        ComponentArgs {
            kind: Some(kind.to_string()),
            from: None,
            variant: None,
            size: None,
            text: None,
            props: Vec::new(),
            all_variants: false,
            preview: false,
            json: false,
            copy: false,
        }
    }

    #[test]
    fn test_build_config_from_flags() {
        let mut args = args("button");
        args.variant = Some("outline".to_string());
        args.size = Some("lg".to_string());
        args.text = Some("Save".to_string());
        args.props = vec!["loading".to_string()];

        let config = args.build_config().unwrap();
        assert_eq!(config.kind(), ComponentKind::Button);
        assert_eq!(config.variant(), "outline");
        assert_eq!(config.size(), "lg");
        assert_eq!(config.text(), "Save");
        assert!(config.is_enabled("loading"));
    }

    #[test]
    fn test_unknown_kind_and_variant_are_rejected() {
        let err = args("modal").build_config().unwrap_err();
        assert_eq!(err.exit_code().code(), 1);
        assert!(err.message().contains("modal"));

        let mut args = args("badge");
        args.variant = Some("outline".to_string());
        assert!(args.build_config().is_err());
    }

    #[test]
    fn test_build_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("alert.json");
        fs::write(
            &path,
            r#"{"type":"alert","variant":"error","props":{"dismissible":true}}"#,
        )
        .unwrap();

        let mut args = args("alert");
        args.kind = None;
        args.from = Some(path);
        args.size = Some("md".to_string());

        let config = args.build_config().unwrap();
        assert_eq!(config.variant(), "error");
        assert_eq!(config.size(), "md");
        assert_eq!(config.text(), "This is an alert message");
        assert!(config.is_enabled("dismissible"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut args = args("card");
        args.kind = None;
        args.from = Some(PathBuf::from("/nonexistent/component.json"));
        assert_eq!(args.build_config().unwrap_err().exit_code().code(), 2);
    }
}
