//! Markup node tree
//!
//! A [`Node`] is either a [`LeafNode`] (raw text, a tag wrapping a single
//! value, or a void `img`) or a [`ParentNode`] (a tag wrapping its children).
//! Nodes are validated on construction and are read-only afterwards.

use crate::attributes::AttributeMap;
use crate::render;
use crate::{MarkupError, Result};

/// The only tag rendered as a void element
pub const IMG_TAG: &str = "img";

/// A markup node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Node {
    /// Node without children
    Leaf(LeafNode),

    /// Tag wrapping an ordered, non-empty list of children
    Parent(ParentNode),
}

/// A node with no children.
///
/// Renders as raw text when it has no tag, as `<img/>` for the `img` tag, and
/// as `<tag>value</tag>` otherwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeafNode {
    tag: Option<String>,
    value: Option<String>,
    attributes: Option<AttributeMap>,
}

/// A tagged node whose content is its children's rendered output
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParentNode {
    tag: Option<String>,
    children: Option<Vec<Node>>,
    attributes: Option<AttributeMap>,
}

impl LeafNode {
    /// Create a leaf node.
    ///
    /// Fails with [`MarkupError::Validation`] when `value` is absent and the
    /// tag is not `img`.
    pub fn new(
        tag: Option<&str>,
        value: Option<&str>,
        attributes: Option<AttributeMap>,
    ) -> Result<Self> {
        validate_leaf(tag, value)?;
        Ok(Self {
            tag: tag.map(str::to_string),
            value: value.map(str::to_string),
            attributes,
        })
    }

    /// Create an untagged leaf that renders as raw text
    pub fn text(value: &str) -> Self {
        Self {
            tag: None,
            value: Some(value.to_string()),
            attributes: None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn attributes(&self) -> Option<&AttributeMap> {
        self.attributes.as_ref()
    }

    /// Check if this leaf renders as a void element
    pub fn is_void(&self) -> bool {
        self.tag() == Some(IMG_TAG)
    }

    /// Render this leaf to HTML
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        render::render_leaf(self, &mut out)?;
        Ok(out)
    }
}

impl ParentNode {
    /// Create a parent node.
    ///
    /// Fails with [`MarkupError::Validation`] when `tag` is absent or
    /// `children` is absent or empty.
    pub fn new(
        tag: Option<&str>,
        children: Option<Vec<Node>>,
        attributes: Option<AttributeMap>,
    ) -> Result<Self> {
        validate_parent(tag, children.as_deref())?;
        Ok(Self {
            tag: tag.map(str::to_string),
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Children in render order
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn attributes(&self) -> Option<&AttributeMap> {
        self.attributes.as_ref()
    }

    /// Render this node and all of its descendants to HTML
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        render::render_parent(self, &mut out)?;
        Ok(out)
    }

    pub(crate) fn raw_children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }
}

impl Node {
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag(),
            Node::Parent(parent) => parent.tag(),
        }
    }

    /// Leaf value; parents never carry one
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.value(),
            Node::Parent(_) => None,
        }
    }

    /// Children in render order; leaves have none
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Parent(parent) => parent.children(),
        }
    }

    pub fn attributes(&self) -> Option<&AttributeMap> {
        match self {
            Node::Leaf(leaf) => leaf.attributes(),
            Node::Parent(parent) => parent.attributes(),
        }
    }

    /// Rendered attribute block of this node, without a leading space
    pub fn attributes_html(&self) -> String {
        crate::attributes::attributes_to_html(self.attributes())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, Node::Parent(_))
    }

    /// Render this node to HTML
    pub fn to_html(&self) -> Result<String> {
        render::to_html(self)
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

/// Leaf invariant: a value is required unless the tag is `img`
pub(crate) fn validate_leaf(tag: Option<&str>, value: Option<&str>) -> Result<()> {
    if value.is_none() && tag != Some(IMG_TAG) {
        tracing::debug!(tag = ?tag, "Rejected leaf node without a value");
        return Err(MarkupError::Validation("leaf node requires a value".to_string()));
    }
    Ok(())
}

/// Parent invariants: a tag and at least one child are required
pub(crate) fn validate_parent(tag: Option<&str>, children: Option<&[Node]>) -> Result<()> {
    if tag.is_none() {
        tracing::debug!("Rejected parent node without a tag");
        return Err(MarkupError::Validation("parent node requires a tag".to_string()));
    }
    if children.map_or(true, <[Node]>::is_empty) {
        tracing::debug!(tag = ?tag, "Rejected parent node without children");
        return Err(MarkupError::Validation("parent node requires at least one child".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    fn leaf(tag: Option<&str>, value: &str) -> Node {
        LeafNode::new(tag, Some(value), None).unwrap().into()
    }

    #[test]
    fn test_leaf_without_value_fails() {
        let err = LeafNode::new(Some("p"), None, None).unwrap_err();
        assert!(matches!(err, MarkupError::Validation(_)));
    }

    #[test]
    fn test_untagged_leaf_without_value_fails() {
        assert!(LeafNode::new(None, None, None).is_err());
    }

    #[test]
    fn test_img_leaf_without_value_is_allowed() {
        let img = LeafNode::new(Some("img"), None, Some(attrs([("src", "a.png")]))).unwrap();
        assert!(img.is_void());
        assert_eq!(img.value(), None);
    }

    #[test]
    fn test_img_check_is_exact() {
        assert!(LeafNode::new(Some("IMG"), None, None).is_err());
        assert!(LeafNode::new(Some("img "), None, None).is_err());
    }

    #[test]
    fn test_empty_value_is_present() {
        let node = LeafNode::new(Some("b"), Some(""), None).unwrap();
        assert_eq!(node.value(), Some(""));
    }

    #[test]
    fn test_parent_without_tag_fails() {
        let err = ParentNode::new(None, Some(vec![leaf(None, "x")]), None).unwrap_err();
        assert_eq!(
            err,
            MarkupError::Validation("parent node requires a tag".to_string())
        );
    }

    #[test]
    fn test_parent_without_children_fails() {
        assert!(ParentNode::new(Some("div"), None, None).is_err());
    }

    #[test]
    fn test_parent_with_empty_children_fails() {
        let err = ParentNode::new(Some("div"), Some(Vec::new()), None).unwrap_err();
        assert_eq!(
            err,
            MarkupError::Validation("parent node requires at least one child".to_string())
        );
    }

    #[test]
    fn test_node_accessors() {
        let parent = ParentNode::new(
            Some("div"),
            Some(vec![leaf(Some("span"), "a"), leaf(None, "b")]),
            Some(attrs([("class", "container")])),
        )
        .unwrap();
        let node = Node::from(parent);

        assert!(node.is_parent());
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.value(), None);
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[0].tag(), Some("span"));
        assert_eq!(node.children()[1].value(), Some("b"));
        assert_eq!(node.attributes_html(), r#"class="container""#);
    }

    #[test]
    fn test_leaf_has_no_children() {
        let node = leaf(Some("p"), "text");
        assert!(node.is_leaf());
        assert!(node.children().is_empty());
        assert_eq!(node.attributes_html(), "");
    }

    #[test]
    fn test_validation_message() {
        let err = LeafNode::new(Some("p"), None, None).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: leaf node requires a value");
    }

    #[test]
    fn test_debug_representation() {
        let node = LeafNode::text("hi");
        assert_eq!(
            format!("{:?}", node),
            r#"LeafNode { tag: None, value: Some("hi"), attributes: None }"#
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::attrs;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaf_attributes_serialize_in_insertion_order() {
        let leaf = LeafNode::new(
            Some("img"),
            Some(""),
            Some(attrs([("src", "a.png"), ("alt", "An image")])),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&leaf).unwrap(),
            r#"{"tag":"img","value":"","attributes":{"src":"a.png","alt":"An image"}}"#
        );
    }

    #[test]
    fn test_node_tree_serializes_by_variant() {
        let child = LeafNode::new(Some("b"), Some("bold"), None).unwrap();
        let parent = ParentNode::new(
            Some("p"),
            Some(vec![child.into()]),
            Some(attrs([("id", "intro"), ("class", "lead")])),
        )
        .unwrap();
        let json = serde_json::to_string(&Node::from(parent)).unwrap();

        assert_eq!(
            json,
            concat!(
                r#"{"Parent":{"tag":"p","#,
                r#""children":[{"Leaf":{"tag":"b","value":"bold","attributes":null}}],"#,
                r#""attributes":{"id":"intro","class":"lead"}}}"#
            )
        );
    }
}
