//! The node kind catalog: display names, visual styling and default
//! configurations keyed by kind tag.
//!
//! The catalog drives the palette, the inspector's kind-label lookup and the
//! default config a freshly placed node starts with. Kinds not present in
//! the catalog are not rejected at edit time; they render with a neutral
//! style and their raw tag as the label.

use ahash::AHashMap;
use serde_json::{Value, json};

/// Neutral fallback styling for kinds the catalog does not know.
pub const FALLBACK_COLOR: &str = "#6b7280";
pub const FALLBACK_ICON: &str = "\u{2B21}";

/// Everything the editor knows about one node kind.
#[derive(Debug, Clone)]
pub struct NodeKindInfo {
    pub display_name: String,
    pub color: String,
    pub icon: String,
    pub default_config: Value,
}

/// Registry of node kinds, keyed by their tag.
#[derive(Debug, Clone, Default)]
pub struct NodeCatalog {
    kinds: AHashMap<String, NodeKindInfo>,
}

impl NodeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the reference workflow studio: trigger,
    /// order intake, CRM/stock checks, finance approval, invoicing,
    /// notification, archival, AI summary, conditional and transform kinds.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register("trigger", "Inicio", "#ff6d5a", "\u{26A1}", json!({}));
        catalog.register(
            "order_input",
            "Recepción de pedido",
            "#3b82f6",
            "\u{1F4E6}",
            json!({"channel": "web"}),
        );
        catalog.register(
            "customer_check",
            "Validación cliente",
            "#06b6d4",
            "\u{1F464}",
            json!({}),
        );
        catalog.register(
            "stock_check",
            "Validación stock",
            "#f59e0b",
            "\u{1F4CA}",
            json!({"warehouse": "MAD-01"}),
        );
        catalog.register(
            "finance_approval",
            "Aprobación financiera",
            "#8b5cf6",
            "\u{1F4B0}",
            json!({}),
        );
        catalog.register(
            "invoice",
            "Generación de factura",
            "#10b981",
            "\u{1F9FE}",
            json!({}),
        );
        catalog.register(
            "notify",
            "Notificación al cliente",
            "#06b6d4",
            "\u{1F4E7}",
            json!({"channel": "email"}),
        );
        catalog.register(
            "archive",
            "Archivo ERP",
            "#6b7280",
            "\u{1F5C4}\u{FE0F}",
            json!({}),
        );
        catalog.register(
            "ai_summary",
            "Resumen IA (ejemplo)",
            "#ec4899",
            "\u{1F916}",
            json!({"tone": "profesional"}),
        );
        catalog.register(
            "conditional_check",
            "Comprobación condicional",
            "#eab308",
            "\u{2753}",
            json!({"condition": "amount > 100"}),
        );
        catalog.register(
            "data_transform",
            "Transformación de datos",
            "#a855f7",
            "\u{1F504}",
            json!({"format": "JSON"}),
        );
        catalog
    }

    /// Builds a catalog from an external kind-to-label listing (the
    /// "list node kinds" boundary call), with neutral styling and empty
    /// default configs.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for (kind, label) in labels {
            catalog.register(
                kind.into(),
                label.into(),
                FALLBACK_COLOR,
                FALLBACK_ICON,
                json!({}),
            );
        }
        catalog
    }

    pub fn register(
        &mut self,
        kind: impl Into<String>,
        display_name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
        default_config: Value,
    ) {
        self.kinds.insert(
            kind.into(),
            NodeKindInfo {
                display_name: display_name.into(),
                color: color.into(),
                icon: icon.into(),
                default_config,
            },
        );
    }

    pub fn get(&self, kind: &str) -> Option<&NodeKindInfo> {
        self.kinds.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Display label for a kind, falling back to the raw tag.
    pub fn display_name<'a>(&'a self, kind: &'a str) -> &'a str {
        self.get(kind).map_or(kind, |info| info.display_name.as_str())
    }

    pub fn color<'a>(&'a self, kind: &'a str) -> &'a str {
        self.get(kind).map_or(FALLBACK_COLOR, |info| info.color.as_str())
    }

    pub fn icon<'a>(&'a self, kind: &'a str) -> &'a str {
        self.get(kind).map_or(FALLBACK_ICON, |info| info.icon.as_str())
    }

    /// Default config for a new node of `kind`; unknown kinds start empty.
    pub fn default_config(&self, kind: &str) -> Value {
        self.get(kind)
            .map_or_else(|| json!({}), |info| info.default_config.clone())
    }

    /// Palette entries in display-name order.
    pub fn entries(&self) -> Vec<(&str, &NodeKindInfo)> {
        let mut entries: Vec<_> = self
            .kinds
            .iter()
            .map(|(kind, info)| (kind.as_str(), info))
            .collect();
        entries.sort_by(|a, b| a.1.display_name.cmp(&b.1.display_name));
        entries
    }
}
