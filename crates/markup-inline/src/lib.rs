//! # markup-inline
//!
//! Convert inline text spans into markup nodes.
//!
//! A [`TextNode`] describes a span of text (plain, bold, italic, code, link,
//! or image) before it becomes markup. [`text_node_to_html_node`] turns it
//! into the matching [`markup_core::LeafNode`], ready to be placed inside a
//! [`markup_core::ParentNode`] and rendered.
//!
//! ## Example
//!
//! ```rust
//! use markup_inline::{text_node_to_html_node, TextNode, TextType};
//!
//! let node = TextNode::new("Example", TextType::Link, Some("https://example.com"));
//! let html = text_node_to_html_node(&node)?.to_html()?;
//! assert_eq!(html, r#"<a href="https://example.com">Example</a>"#);
//!
//! // Text types can also be named
//! let err = TextNode::parse("x", "unsupported", None).unwrap_err();
//! assert!(matches!(err, markup_inline::InlineError::UnsupportedVariant(_)));
//! # Ok::<(), markup_inline::InlineError>(())
//! ```

mod convert;
mod text;

pub use convert::{text_node_to_html_node, text_nodes_to_html_nodes};
pub use text::{TextNode, TextType};

use markup_core::MarkupError;

/// Error type for inline conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("Missing field: {text_type} text requires a {field}")]
    MissingField {
        text_type: TextType,
        field: &'static str,
    },

    #[error("Unsupported text type: {0}")]
    UnsupportedVariant(String),

    #[error(transparent)]
    Markup(#[from] MarkupError),
}

pub type Result<T> = std::result::Result<T, InlineError>;
