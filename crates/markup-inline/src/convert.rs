//! Convert inline text spans to markup nodes
//!
//! Each text type maps to exactly one leaf shape: untagged text, `<b>`,
//! `<i>`, `<code>`, `<a href>` or a void `<img src alt>`.

use markup_core::{attrs, LeafNode, Node, IMG_TAG};

use crate::text::{TextNode, TextType};
use crate::{InlineError, Result};

/// Convert a text node into the matching leaf node
pub fn text_node_to_html_node(node: &TextNode) -> Result<Node> {
    let text = node.text.as_deref();

    let leaf = match node.text_type {
        TextType::Text => LeafNode::new(None, text, None)?,
        TextType::Bold => LeafNode::new(Some("b"), text, None)?,
        TextType::Italic => LeafNode::new(Some("i"), text, None)?,
        TextType::Code => LeafNode::new(Some("code"), text, None)?,
        TextType::Link => {
            let url = required(node, node.url.as_deref(), "url")?;
            LeafNode::new(Some("a"), text, Some(attrs([("href", url)])))?
        }
        TextType::Image => {
            let url = required(node, node.url.as_deref(), "url")?;
            let alt = required(node, node.alt.as_deref(), "alt")?;
            LeafNode::new(
                Some(IMG_TAG),
                Some(""),
                Some(attrs([("src", url), ("alt", alt)])),
            )?
        }
    };

    Ok(Node::Leaf(leaf))
}

/// Convert a run of text nodes in order, stopping at the first failure
pub fn text_nodes_to_html_nodes(nodes: &[TextNode]) -> Result<Vec<Node>> {
    nodes.iter().map(text_node_to_html_node).collect()
}

impl TryFrom<&TextNode> for Node {
    type Error = InlineError;

    fn try_from(node: &TextNode) -> Result<Self> {
        text_node_to_html_node(node)
    }
}

/// A field that must be present and non-empty for this text type
fn required<'a>(node: &TextNode, value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            tracing::debug!(text_type = %node.text_type, field, "Missing required field");
            Err(InlineError::MissingField {
                text_type: node.text_type,
                field,
            })
        }
    }
}
