//! HTML serialization of the markup tree
//!
//! Converts markup nodes into an HTML fragment string. Text and attribute
//! values are written verbatim.

use crate::attributes::{push_attributes, AttributeMap};
use crate::node::{validate_leaf, validate_parent, LeafNode, Node, ParentNode};
use crate::Result;

/// Render a node to an HTML string
pub fn to_html(node: &Node) -> Result<String> {
    let mut output = String::new();
    render_node(node, &mut output)?;
    Ok(output)
}

fn render_node(node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Leaf(leaf) => render_leaf(leaf, out),
        Node::Parent(parent) => render_parent(parent, out),
    }
}

pub(crate) fn render_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    validate_leaf(leaf.tag(), leaf.value())?;

    match leaf.tag() {
        None => out.push_str(leaf.value().unwrap_or_default()),

        Some(tag) if leaf.is_void() => {
            out.push('<');
            out.push_str(tag);
            push_attribute_block(leaf.attributes(), out);
            out.push_str("/>");
        }

        Some(tag) => {
            push_open_tag(tag, leaf.attributes(), out);
            out.push_str(leaf.value().unwrap_or_default());
            push_close_tag(tag, out);
        }
    }

    Ok(())
}

pub(crate) fn render_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    validate_parent(parent.tag(), parent.raw_children())?;

    let tag = parent.tag().unwrap_or_default();
    push_open_tag(tag, parent.attributes(), out);
    for child in parent.children() {
        render_node(child, out)?;
    }
    push_close_tag(tag, out);

    Ok(())
}

fn push_open_tag(tag: &str, attributes: Option<&AttributeMap>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attribute_block(attributes, out);
    out.push('>');
}

fn push_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Space-prefixed attribute block, or nothing when there are no attributes
fn push_attribute_block(attributes: Option<&AttributeMap>, out: &mut String) {
    if attributes.is_some_and(|a| !a.is_empty()) {
        out.push(' ');
        push_attributes(attributes, out);
    }
}
