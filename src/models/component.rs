//! Component configuration model.
//!
//! A configuration always refers to variant, size and prop names owned by
//! the template of its kind. Setters validate against the registry and
//! switching kind resets everything to that kind's defaults, so stale
//! combinations (a button variant on a badge) cannot be built.

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::components::templates::{template, ComponentTemplate};

/// The five supported component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Clickable button
    Button,
    /// Content container
    Card,
    /// Text input field
    Input,
    /// Small status label
    Badge,
    /// Inline message box
    Alert,
}

impl ComponentKind {
    /// All kinds in registry order.
    pub const ALL: [Self; 5] = [
        Self::Button,
        Self::Card,
        Self::Input,
        Self::Badge,
        Self::Alert,
    ];

    /// Lowercase kind name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Card => "card",
            Self::Input => "input",
            Self::Badge => "badge",
            Self::Alert => "alert",
        }
    }

    /// Template describing this kind.
    #[must_use]
    pub fn template(self) -> &'static ComponentTemplate {
        template(self)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown component type '{s}'. Expected one of: button, card, input, badge, alert"
                )
            })
    }
}

/// Configuration for one generated component.
///
/// Deserialization goes through the same validated setters, so a file naming
/// a variant, size or prop the kind does not have is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentConfig {
    #[serde(rename = "type")]
    kind: ComponentKind,
    variant: &'static str,
    size: &'static str,
    text: String,
    props: IndexMap<&'static str, bool>,
}

impl ComponentConfig {
    /// Creates a configuration with the kind's defaults.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        let template = kind.template();
        Self {
            kind,
            variant: template.default_variant(),
            size: template.default_size(),
            text: template.default_text.to_string(),
            props: IndexMap::new(),
        }
    }

    /// Component kind.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Selected variant.
    #[must_use]
    pub const fn variant(&self) -> &'static str {
        self.variant
    }

    /// Selected size.
    #[must_use]
    pub const fn size(&self) -> &'static str {
        self.size
    }

    /// Display text (placeholder for inputs).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Props in the order they were first set.
    #[must_use]
    pub const fn props(&self) -> &IndexMap<&'static str, bool> {
        &self.props
    }

    /// Whether a prop is set to true.
    #[must_use]
    pub fn is_enabled(&self, prop: &str) -> bool {
        self.props.get(prop).copied().unwrap_or(false)
    }

    /// Names of props set to true, in props order.
    pub fn enabled_props(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.props
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| *name)
    }

    /// Switches kind, resetting variant, size, text and props to the new
    /// kind's defaults. Switching to the current kind also resets.
    pub fn set_kind(&mut self, kind: ComponentKind) {
        *self = Self::new(kind);
    }

    /// Selects a variant allowed by the current kind.
    pub fn set_variant(&mut self, variant: &str) -> Result<()> {
        let template = self.kind.template();
        self.variant = template.find_variant(variant).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid variant '{variant}' for {}. Allowed: {}",
                self.kind,
                template.variants.join(", ")
            )
        })?;
        Ok(())
    }

    /// Selects a size allowed by the current kind.
    pub fn set_size(&mut self, size: &str) -> Result<()> {
        let template = self.kind.template();
        self.size = template.find_size(size).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid size '{size}' for {}. Allowed: {}",
                self.kind,
                template.sizes.join(", ")
            )
        })?;
        Ok(())
    }

    /// Sets the display text.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Sets a prop understood by the current kind.
    ///
    /// A prop keeps its original position when it is set again.
    pub fn set_prop(&mut self, prop: &str, enabled: bool) -> Result<()> {
        let template = self.kind.template();
        let name = template.find_prop(prop).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid prop '{prop}' for {}. Allowed: {}",
                self.kind,
                template.props.join(", ")
            )
        })?;
        self.props.insert(name, enabled);
        Ok(())
    }
}

/// Unvalidated shape used when deserializing a configuration.
#[derive(Deserialize)]
struct RawComponentConfig {
    #[serde(rename = "type")]
    kind: ComponentKind,
    variant: Option<String>,
    size: Option<String>,
    text: Option<String>,
    #[serde(default)]
    props: IndexMap<String, bool>,
}

impl TryFrom<RawComponentConfig> for ComponentConfig {
    type Error = anyhow::Error;

    fn try_from(raw: RawComponentConfig) -> Result<Self> {
        let mut config = Self::new(raw.kind);
        if let Some(variant) = &raw.variant {
            config.set_variant(variant)?;
        }
        if let Some(size) = &raw.size {
            config.set_size(size)?;
        }
        if let Some(text) = &raw.text {
            config.set_text(text);
        }
        for (prop, enabled) in &raw.props {
            config.set_prop(prop, *enabled)?;
        }
        Ok(config)
    }
}

impl<'de> Deserialize<'de> for ComponentConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawComponentConfig::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_template_defaults() {
        let config = ComponentConfig::new(ComponentKind::Alert);
        assert_eq!(config.variant(), "info");
        assert_eq!(config.size(), "sm");
        assert_eq!(config.text(), "This is an alert message");
        assert!(config.props().is_empty());
    }

    #[test]
    fn test_switching_kind_resets_for_all_transitions() {
        for from in ComponentKind::ALL {
            for to in ComponentKind::ALL {
                let mut config = ComponentConfig::new(from);
                let template = from.template();
                config.set_variant(template.variants[template.variants.len() - 1]).unwrap();
                config.set_size("lg").unwrap();
                config.set_text("custom");
                config.set_prop(template.props[0], true).unwrap();

                config.set_kind(to);

                let target = to.template();
                assert_eq!(config.kind(), to);
                assert_eq!(config.variant(), target.variants[0], "{from} -> {to}");
                assert_eq!(config.size(), target.sizes[0], "{from} -> {to}");
                assert_eq!(config.text(), target.default_text);
                assert!(config.props().is_empty(), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_rejects_variant_from_other_kind() {
        let mut config = ComponentConfig::new(ComponentKind::Badge);
        assert!(config.set_variant("destructive").is_err());
        assert_eq!(config.variant(), "default");
    }

    #[test]
    fn test_rejects_unknown_size_and_prop() {
        let mut config = ComponentConfig::new(ComponentKind::Button);
        assert!(config.set_size("xl").is_err());
        assert!(config.set_prop("dismissible", true).is_err());
        assert!(config.props().is_empty());
    }

    #[test]
    fn test_prop_order_is_insertion_order() {
        let mut config = ComponentConfig::new(ComponentKind::Button);
        config.set_prop("loading", true).unwrap();
        config.set_prop("disabled", true).unwrap();
        config.set_prop("loading", false).unwrap();
        config.set_prop("loading", true).unwrap();

        let enabled: Vec<&str> = config.enabled_props().collect();
        assert_eq!(enabled, vec!["loading", "disabled"]);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Card".parse::<ComponentKind>().unwrap(), ComponentKind::Card);
        assert!("modal".parse::<ComponentKind>().is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let config: ComponentConfig = serde_json::from_str(
            r#"{"type":"button","variant":"outline","size":"lg","text":"Go","props":{"disabled":true}}"#,
        )
        .unwrap();
        assert_eq!(config.variant(), "outline");
        assert_eq!(config.size(), "lg");
        assert!(config.is_enabled("disabled"));

        let stale = serde_json::from_str::<ComponentConfig>(
            r#"{"type":"badge","variant":"destructive"}"#,
        );
        assert!(stale.is_err());
    }

    #[test]
    fn test_deserialize_from_owned_string() {
        let variant = String::from("ghost");
        let json = format!(
            r#"{{"type":"button","variant":"{variant}","text":"Read more","props":{{"loading":true}}}}"#
        );
        let config: ComponentConfig = serde_json::from_str(&json).unwrap();
        drop(json);

        assert_eq!(config.kind(), ComponentKind::Button);
        assert_eq!(config.variant(), "ghost");
        assert_eq!(config.text(), "Read more");
        assert!(config.is_enabled("loading"));

        let unknown_prop = format!(r#"{{"type":"card","props":{{"{}":true}}}}"#, "sparkle");
        let err = serde_json::from_str::<ComponentConfig>(&unknown_prop).unwrap_err();
        assert!(err.to_string().contains("sparkle"));
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let config = ComponentConfig::new(ComponentKind::Input);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "input");
        assert_eq!(json["variant"], "default");
        assert_eq!(json["text"], "Enter text...");
    }
}
