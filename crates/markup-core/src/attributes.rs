//! HTML attribute maps and their rendering

use indexmap::IndexMap;

/// Ordered attribute name to value mapping.
///
/// Insertion order is the order attributes appear in rendered output.
pub type AttributeMap = IndexMap<String, String>;

/// Build an attribute map from `(name, value)` pairs, keeping their order
pub fn attrs<K, V, I>(pairs: I) -> AttributeMap
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Render attributes as `key="value"` pairs separated by single spaces.
///
/// An absent or empty map renders as the empty string. Keys and values are
/// emitted verbatim, without escaping.
pub fn attributes_to_html(attributes: Option<&AttributeMap>) -> String {
    let mut out = String::new();
    push_attributes(attributes, &mut out);
    out
}

/// Append rendered attributes to `out` (no leading space)
pub(crate) fn push_attributes(attributes: Option<&AttributeMap>, out: &mut String) {
    let Some(attributes) = attributes else {
        return;
    };

    for (i, (key, value)) in attributes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
