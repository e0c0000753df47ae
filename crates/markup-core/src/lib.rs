//! markup-core - Markup node tree and HTML serialization
//!
//! This crate provides a small document-object model for building a tree of
//! markup nodes and rendering it to an HTML fragment string. It is used by
//! `markup-inline` to turn inline text spans into markup.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────────┐
//! LeafNode ──────▶│                      │
//!                 │ Node (Leaf | Parent) │ ──▶ HTML String
//! ParentNode ────▶│                      │
//!                 └──────────────────────┘
//! ```
//!
//! Nodes are validated when they are constructed and again when they are
//! rendered. Rendering never escapes text or attribute values.
//!
//! # Example
//!
//! ```rust
//! use markup_core::{attrs, LeafNode, Node, ParentNode};
//!
//! let div = ParentNode::new(
//!     Some("div"),
//!     Some(vec![
//!         LeafNode::new(Some("span"), Some("First child"), None)?.into(),
//!         LeafNode::new(None, Some("Just text"), None)?.into(),
//!         LeafNode::new(
//!             Some("a"),
//!             Some("Link"),
//!             Some(attrs([("href", "https://example.com")])),
//!         )?
//!         .into(),
//!     ]),
//!     None,
//! )?;
//!
//! assert_eq!(
//!     Node::from(div).to_html()?,
//!     r#"<div><span>First child</span>Just text<a href="https://example.com">Link</a></div>"#,
//! );
//! # Ok::<(), markup_core::MarkupError>(())
//! ```

mod attributes;
mod node;
mod render;

pub use attributes::{attributes_to_html, attrs, AttributeMap};
pub use node::{LeafNode, Node, ParentNode, IMG_TAG};
pub use render::to_html;

/// Error type for markup operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, MarkupError>;
