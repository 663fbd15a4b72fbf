//! Session list of generated components.

use serde::Serialize;
use tracing::debug;

use super::generate_component_code;
use crate::models::ComponentConfig;

/// A configuration together with the code generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedComponent {
    /// Configuration snapshot at generation time
    pub config: ComponentConfig,
    /// Generated source snippet
    pub code: String,
}

/// Components generated during one session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ComponentWorkbench {
    generated: Vec<GeneratedComponent>,
}

impl ComponentWorkbench {
    /// Create a new empty workbench.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generated: Vec::new(),
        }
    }

    /// Generates code for `config` and appends it to the list.
    pub fn generate(&mut self, config: &ComponentConfig) -> &GeneratedComponent {
        let code = generate_component_code(config);
        debug!("Generated {} component ({} bytes)", config.kind(), code.len());
        self.generated.push(GeneratedComponent {
            config: config.clone(),
            code,
        });
        &self.generated[self.generated.len() - 1]
    }

    /// All generated components.
    #[must_use]
    pub fn generated(&self) -> &[GeneratedComponent] {
        &self.generated
    }

    /// Number of generated components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generated.len()
    }

    /// Whether nothing has been generated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generated.is_empty()
    }

    /// Concatenated code of every generated component, separated by blank lines.
    #[must_use]
    pub fn combined_code(&self) -> String {
        self.generated
            .iter()
            .map(|c| c.code.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Removes every generated component.
    pub fn clear(&mut self) {
        self.generated.clear();
    }
}
