//! Component preview rendering.
//!
//! Maps a configuration onto utility classes through fixed per-kind style
//! tables, then lets props adjust the result. The output is a small element
//! description that can be printed as HTML.

use serde::Serialize;
use std::fmt::Write as _;

use crate::models::{ComponentConfig, ComponentKind};

/// Extra pieces rendered inside or next to the main element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "part", rename_all = "camelCase")]
pub enum PreviewPart {
    /// Spinning loading indicator before the text
    Spinner,
    /// Close control for dismissible alerts
    CloseButton,
    /// Validation message below an input
    ErrorMessage {
        /// Message text
        message: String,
    },
}

/// Rendered description of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// HTML element name
    pub element: &'static str,
    /// Utility classes in application order
    pub classes: Vec<&'static str>,
    /// Visible text (placeholder for inputs)
    pub text: String,
    /// Extra HTML attributes
    pub attributes: Vec<(&'static str, String)>,
    /// Decorations rendered with the element
    pub parts: Vec<PreviewPart>,
}

impl Preview {
    /// Space-separated class list.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Whether a class was applied.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Renders the preview as a static HTML snippet.
    ///
    /// Text, attribute values and messages are escaped; class names come
    /// from the fixed style tables and are written as is.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut attrs = format!(" class=\"{}\"", self.class_name());
        for (name, value) in &self.attributes {
            if value.is_empty() {
                let _ = write!(attrs, " {name}");
            } else {
                let _ = write!(attrs, " {name}=\"{}\"", escape_html(value));
            }
        }

        if self.element == "input" {
            let mut html = format!("<input{attrs} />");
            for part in &self.parts {
                if let PreviewPart::ErrorMessage { message } = part {
                    let _ = write!(
                        html,
                        "\n<p class=\"mt-1 text-sm text-red-600\">{}</p>",
                        escape_html(message)
                    );
                }
            }
            return html;
        }

        let mut inner = String::new();
        for part in &self.parts {
            match part {
                PreviewPart::Spinner => {
                    inner.push_str("<span class=\"mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent\"></span>");
                }
                PreviewPart::CloseButton | PreviewPart::ErrorMessage { .. } => {}
            }
        }
        inner.push_str(&escape_html(&self.text));
        if self.parts.contains(&PreviewPart::CloseButton) {
            inner.push_str("<button class=\"absolute right-2 top-2 opacity-70 hover:opacity-100\" aria-label=\"Dismiss\">×</button>");
        }

        format!("<{el}{attrs}>{inner}</{el}>", el = self.element)
    }
}

/// Escapes the characters that are significant in HTML text and
/// double-quoted attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

struct StyleTable {
    element: &'static str,
    base: &'static [&'static str],
    variants: &'static [(&'static str, &'static [&'static str])],
    sizes: &'static [(&'static str, &'static [&'static str])],
}

static BUTTON_STYLES: StyleTable = StyleTable {
    element: "button",
    base: &["inline-flex", "items-center", "justify-center", "rounded-md", "font-medium", "transition-colors"],
    variants: &[
        ("primary", &["bg-blue-600", "text-white", "hover:bg-blue-700"]),
        ("secondary", &["bg-gray-200", "text-gray-900", "hover:bg-gray-300"]),
        ("outline", &["border", "border-gray-300", "bg-transparent", "text-gray-900", "hover:bg-gray-50"]),
        ("ghost", &["bg-transparent", "text-gray-900", "hover:bg-gray-100"]),
        ("destructive", &["bg-red-600", "text-white", "hover:bg-red-700"]),
    ],
    sizes: &[
        ("sm", &["px-3", "py-1.5", "text-sm"]),
        ("md", &["px-4", "py-2", "text-base"]),
        ("lg", &["px-6", "py-3", "text-lg"]),
    ],
};

static CARD_STYLES: StyleTable = StyleTable {
    element: "div",
    base: &["rounded-lg"],
    variants: &[
        ("default", &["bg-white", "border", "border-gray-200"]),
        ("elevated", &["bg-white", "shadow-lg"]),
        ("outlined", &["bg-transparent", "border-2", "border-gray-300"]),
        ("filled", &["bg-gray-100"]),
    ],
    sizes: &[("sm", &["p-3"]), ("md", &["p-4"]), ("lg", &["p-6"])],
};

static INPUT_STYLES: StyleTable = StyleTable {
    element: "input",
    base: &["w-full", "rounded-md", "outline-none", "focus:ring-2", "focus:ring-blue-500"],
    variants: &[
        ("default", &["border", "border-gray-300", "bg-white"]),
        ("filled", &["border", "border-transparent", "bg-gray-100"]),
        ("outlined", &["border-2", "border-gray-400", "bg-transparent"]),
    ],
    sizes: &[
        ("sm", &["px-2", "py-1", "text-sm"]),
        ("md", &["px-3", "py-2", "text-base"]),
        ("lg", &["px-4", "py-3", "text-lg"]),
    ],
};

static BADGE_STYLES: StyleTable = StyleTable {
    element: "span",
    base: &["inline-flex", "items-center", "font-medium"],
    variants: &[
        ("default", &["bg-gray-100", "text-gray-800"]),
        ("primary", &["bg-blue-100", "text-blue-800"]),
        ("secondary", &["bg-purple-100", "text-purple-800"]),
        ("success", &["bg-green-100", "text-green-800"]),
        ("warning", &["bg-yellow-100", "text-yellow-800"]),
        ("error", &["bg-red-100", "text-red-800"]),
    ],
    sizes: &[
        ("sm", &["px-2", "py-0.5", "text-xs"]),
        ("md", &["px-2.5", "py-1", "text-sm"]),
        ("lg", &["px-3", "py-1.5", "text-base"]),
    ],
};

static ALERT_STYLES: StyleTable = StyleTable {
    element: "div",
    base: &["relative", "rounded-lg", "border"],
    variants: &[
        ("info", &["bg-blue-50", "border-blue-200", "text-blue-800"]),
        ("success", &["bg-green-50", "border-green-200", "text-green-800"]),
        ("warning", &["bg-yellow-50", "border-yellow-200", "text-yellow-800"]),
        ("error", &["bg-red-50", "border-red-200", "text-red-800"]),
    ],
    sizes: &[
        ("sm", &["p-3", "text-sm"]),
        ("md", &["p-4", "text-base"]),
        ("lg", &["p-6", "text-lg"]),
    ],
};

fn styles(kind: ComponentKind) -> &'static StyleTable {
    match kind {
        ComponentKind::Button => &BUTTON_STYLES,
        ComponentKind::Card => &CARD_STYLES,
        ComponentKind::Input => &INPUT_STYLES,
        ComponentKind::Badge => &BADGE_STYLES,
        ComponentKind::Alert => &ALERT_STYLES,
    }
}

fn lookup(
    table: &'static [(&'static str, &'static [&'static str])],
    key: &str,
) -> &'static [&'static str] {
    // Variant and size always come from the kind's template, so every key
    // has a row. An absent row renders unstyled.
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, classes)| *classes)
        .unwrap_or(&[])
}

/// Renders a configuration into a preview description.
///
/// Props alter the appearance: `disabled` dims the element, `loading` shows a
/// spinner with "Loading...", `hover` and `shadow` add elevation, `error`
/// adds a red border and message, `rounded` makes a pill, `dismissible` adds
/// a close control.
#[must_use]
pub fn render_preview(config: &ComponentConfig) -> Preview {
    let table = styles(config.kind());

    let mut preview = Preview {
        element: table.element,
        classes: table.base.to_vec(),
        text: config.text().to_string(),
        attributes: Vec::new(),
        parts: Vec::new(),
    };
    preview.classes.extend_from_slice(lookup(table.variants, config.variant()));
    preview.classes.extend_from_slice(lookup(table.sizes, config.size()));

    match config.kind() {
        ComponentKind::Button => {
            if config.is_enabled("disabled") {
                preview.classes.extend(["opacity-50", "cursor-not-allowed"]);
                preview.attributes.push(("disabled", String::new()));
            }
            if config.is_enabled("loading") {
                preview.classes.push("cursor-wait");
                preview.parts.push(PreviewPart::Spinner);
                preview.text = "Loading...".to_string();
            }
        }
        ComponentKind::Card => {
            if config.is_enabled("shadow") {
                preview.classes.push("shadow-md");
            }
            if config.is_enabled("hover") {
                preview.classes.extend(["transition-shadow", "hover:shadow-xl"]);
            }
        }
        ComponentKind::Input => {
            preview.attributes.push(("placeholder", config.text().to_string()));
            preview.text.clear();
            if config.is_enabled("disabled") {
                preview.classes.extend(["opacity-50", "cursor-not-allowed"]);
                preview.attributes.push(("disabled", String::new()));
            }
            if config.is_enabled("error") {
                preview.classes.extend(["border-red-500", "focus:ring-red-500"]);
                preview.parts.push(PreviewPart::ErrorMessage {
                    message: "This field has an error".to_string(),
                });
            }
        }
        ComponentKind::Badge => {
            preview.classes.push(if config.is_enabled("rounded") {
                "rounded-full"
            } else {
                "rounded"
            });
        }
        ComponentKind::Alert => {
            preview.attributes.push(("role", "alert".to_string()));
            if config.is_enabled("dismissible") {
                preview.classes.push("pr-10");
                preview.parts.push(PreviewPart::CloseButton);
            }
        }
    }

    preview
}
