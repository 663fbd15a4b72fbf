//! Static component template registry.
//!
//! Each component kind declares its allowed variants, sizes, default text
//! and boolean props. The first variant and size are the defaults applied
//! when a configuration switches kind.

use crate::models::ComponentKind;

/// Read-only description of what a component kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentTemplate {
    /// Kind this template describes
    pub kind: ComponentKind,
    /// Allowed variants, default first
    pub variants: &'static [&'static str],
    /// Allowed sizes, default first
    pub sizes: &'static [&'static str],
    /// Text used for a freshly selected kind
    pub default_text: &'static str,
    /// Boolean prop names the kind understands
    pub props: &'static [&'static str],
}

impl ComponentTemplate {
    /// Default (first declared) variant.
    #[must_use]
    pub fn default_variant(&self) -> &'static str {
        self.variants[0]
    }

    /// Default (first declared) size.
    #[must_use]
    pub fn default_size(&self) -> &'static str {
        self.sizes[0]
    }

    /// Resolves a variant name to the registry's own string.
    #[must_use]
    pub fn find_variant(&self, name: &str) -> Option<&'static str> {
        self.variants.iter().copied().find(|v| *v == name)
    }

    /// Resolves a size name to the registry's own string.
    #[must_use]
    pub fn find_size(&self, name: &str) -> Option<&'static str> {
        self.sizes.iter().copied().find(|s| *s == name)
    }

    /// Resolves a prop name to the registry's own string.
    #[must_use]
    pub fn find_prop(&self, name: &str) -> Option<&'static str> {
        self.props.iter().copied().find(|p| *p == name)
    }
}

const SIZES: &[&str] = &["sm", "md", "lg"];

/// All templates, in [`ComponentKind::ALL`] order.
pub static TEMPLATES: [ComponentTemplate; 5] = [
    ComponentTemplate {
        kind: ComponentKind::Button,
        variants: &["primary", "secondary", "outline", "ghost", "destructive"],
        sizes: SIZES,
        default_text: "Click me",
        props: &["disabled", "loading"],
    },
    ComponentTemplate {
        kind: ComponentKind::Card,
        variants: &["default", "elevated", "outlined", "filled"],
        sizes: SIZES,
        default_text: "Card content",
        props: &["shadow", "hover"],
    },
    ComponentTemplate {
        kind: ComponentKind::Input,
        variants: &["default", "filled", "outlined"],
        sizes: SIZES,
        default_text: "Enter text...",
        props: &["disabled", "error"],
    },
    ComponentTemplate {
        kind: ComponentKind::Badge,
        variants: &["default", "primary", "secondary", "success", "warning", "error"],
        sizes: SIZES,
        default_text: "Badge",
        props: &["rounded"],
    },
    ComponentTemplate {
        kind: ComponentKind::Alert,
        variants: &["info", "success", "warning", "error"],
        sizes: SIZES,
        default_text: "This is an alert message",
        props: &["dismissible"],
    },
];

/// Gets the template for a kind.
#[must_use]
pub fn template(kind: ComponentKind) -> &'static ComponentTemplate {
    &TEMPLATES[kind as usize]
}
