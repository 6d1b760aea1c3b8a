use crate::catalog::NodeCatalog;
use crate::error::EditError;
use crate::graph::{Canvas, Node};
use serde_json::Value;

/// The selected node's fields, projected for an editable form.
///
/// `kind_label` is resolved through the catalog; `config_text` is the
/// pretty-printed configuration JSON. When nothing is selected the panel
/// shows a placeholder instead, which is simply the `None` case of
/// [`project`].
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorView {
    pub node_id: String,
    pub kind_label: String,
    pub label: String,
    pub config_text: String,
}

/// Projects the selected node into the inspector form. Returns `None` when
/// nothing is selected or the selection no longer resolves.
pub fn project(
    canvas: &Canvas,
    catalog: &NodeCatalog,
    selected: Option<&str>,
) -> Option<InspectorView> {
    let node = canvas.node(selected?)?;
    Some(InspectorView {
        node_id: node.id.clone(),
        kind_label: catalog.display_name(&node.kind).to_string(),
        label: node.label.clone(),
        config_text: serde_json::to_string_pretty(&node.config)
            .unwrap_or_else(|_| "{}".to_string()),
    })
}

/// Commits an inspector edit back into the node.
///
/// The configuration text is parsed first: on failure the whole edit is
/// rejected and the node is left byte-for-byte unchanged, so the user can
/// fix the text and resubmit. A blank or whitespace-only label keeps the
/// previous value; blank configuration text means an empty object.
pub fn apply_edit(node: &mut Node, label: &str, config_text: &str) -> Result<(), EditError> {
    let raw = config_text.trim();
    let config: Value = if raw.is_empty() {
        serde_json::json!({})
    } else {
        serde_json::from_str(raw).map_err(|e| EditError::InvalidConfig(e.to_string()))?
    };

    let label = label.trim();
    if !label.is_empty() {
        node.label = label.to_string();
    }
    node.config = config;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use serde_json::json;

    fn sample_node() -> Node {
        let mut canvas = Canvas::new();
        canvas
            .add_node(
                "notify",
                "Notify customer",
                Point::new(100.0, 100.0),
                json!({"channel": "email"}),
            )
            .clone()
    }

    #[test]
    fn bad_json_rejects_the_whole_edit() {
        let mut node = sample_node();
        let before = node.clone();
        let err = apply_edit(&mut node, "New label", "{not json").unwrap_err();
        assert!(matches!(err, EditError::InvalidConfig(_)));
        assert_eq!(node, before);
    }

    #[test]
    fn blank_label_keeps_previous_value() {
        let mut node = sample_node();
        apply_edit(&mut node, "   ", r#"{"channel": "sms"}"#).unwrap();
        assert_eq!(node.label, "Notify customer");
        assert_eq!(node.config, json!({"channel": "sms"}));
    }

    #[test]
    fn blank_config_text_means_empty_object() {
        let mut node = sample_node();
        apply_edit(&mut node, "Renamed", "").unwrap();
        assert_eq!(node.label, "Renamed");
        assert_eq!(node.config, json!({}));
    }

    #[test]
    fn projection_resolves_kind_through_catalog() {
        let canvas = {
            let mut c = Canvas::new();
            c.add_node("notify", "N", Point::new(10.0, 10.0), json!({}));
            c
        };
        let id = canvas.nodes[0].id.clone();
        let view = project(&canvas, &NodeCatalog::builtin(), Some(&id)).unwrap();
        assert_eq!(view.kind_label, "Notificación al cliente");
        assert!(project(&canvas, &NodeCatalog::builtin(), None).is_none());
    }
}
