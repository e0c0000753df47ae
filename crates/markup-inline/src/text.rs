//! Inline text spans

use std::fmt;
use std::str::FromStr;

use crate::InlineError;

/// Kind of an inline text span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum TextType {
    /// Plain text
    Text,
    Bold,
    Italic,
    /// Inline code
    Code,
    /// Link with text and url
    Link,
    /// Image with url and alt text
    Image,
}

impl TextType {
    pub const ALL: [TextType; 6] = [
        TextType::Text,
        TextType::Bold,
        TextType::Italic,
        TextType::Code,
        TextType::Link,
        TextType::Image,
    ];

    /// Lower-case name of this text type
    pub fn as_str(&self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TextType {
    type Error = InlineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TextType> for String {
    fn from(text_type: TextType) -> Self {
        text_type.as_str().to_string()
    }
}

impl FromStr for TextType {
    type Err = InlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(TextType::Text),
            "bold" => Ok(TextType::Bold),
            "italic" => Ok(TextType::Italic),
            "code" => Ok(TextType::Code),
            "link" => Ok(TextType::Link),
            "image" => Ok(TextType::Image),
            other => {
                tracing::debug!(text_type = other, "Rejected unsupported text type");
                Err(InlineError::UnsupportedVariant(other.to_string()))
            }
        }
    }
}

/// A span of inline text.
///
/// Plain data: it has no rendering of its own and is converted into markup
/// with [`crate::text_node_to_html_node`]. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextNode {
    pub(crate) text: Option<String>,
    pub(crate) text_type: TextType,
    pub(crate) url: Option<String>,
    pub(crate) alt: Option<String>,
}

impl TextNode {
    /// Create a text node with an optional url
    pub fn new(text: &str, text_type: TextType, url: Option<&str>) -> Self {
        Self {
            text: Some(text.to_string()),
            text_type,
            url: url.map(str::to_string),
            alt: None,
        }
    }

    /// Create a text node from a text type name such as `"bold"`
    pub fn parse(text: &str, text_type: &str, url: Option<&str>) -> Result<Self, InlineError> {
        Ok(Self::new(text, text_type.parse()?, url))
    }

    /// Create an image node
    pub fn image(url: &str, alt: &str) -> Self {
        Self {
            text: None,
            text_type: TextType::Image,
            url: Some(url.to_string()),
            alt: Some(alt.to_string()),
        }
    }

    /// Set the alt text
    pub fn with_alt(mut self, alt: &str) -> Self {
        self.alt = Some(alt.to_string());
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn text_type(&self) -> TextType {
        self.text_type
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_type_uses_lowercase_names() {
        for text_type in TextType::ALL {
            let json = serde_json::to_string(&text_type).unwrap();
            assert_eq!(json, format!("\"{}\"", text_type.as_str()));
            assert_eq!(serde_json::from_str::<TextType>(&json).unwrap(), text_type);
        }
    }

    #[test]
    fn test_text_node_round_trip() {
        let node = TextNode::new("x", TextType::Bold, None);
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"text":"x","text_type":"bold","url":null,"alt":null}"#
        );
        assert_eq!(serde_json::from_str::<TextNode>(&json).unwrap(), node);
    }

    #[test]
    fn test_text_node_from_data_without_optional_fields() {
        let data = r#"{"text":"Example","text_type":"link","url":"https://example.com"}"#;
        let node: TextNode = serde_json::from_str(data).unwrap();
        assert_eq!(
            node,
            TextNode::new("Example", TextType::Link, Some("https://example.com"))
        );
    }

    #[test]
    fn test_unknown_text_type_is_unsupported() {
        let err = serde_json::from_str::<TextType>(r#""unsupported""#).unwrap_err();
        let expected = InlineError::UnsupportedVariant("unsupported".to_string()).to_string();
        assert!(err.to_string().starts_with(&expected));
    }

    #[test]
    fn test_unknown_text_type_in_node_is_unsupported() {
        let err = serde_json::from_str::<TextNode>(r#"{"text":"x","text_type":"underline"}"#)
            .unwrap_err();
        assert!(err.to_string().starts_with("Unsupported text type: underline"));
    }
}
