//! Generic HTML node tree.
//!
//! Conversion builds an [`HtmlNode`] tree bottom-up and renders it to an
//! HTML string in a single pass. Nodes are immutable once constructed;
//! each conversion call produces a fresh tree.

use std::fmt::Write;

use crate::error::ConvertError;

/// A node in the rendered HTML tree.
///
/// Either a leaf carrying raw text, or an element with a tag, ordered
/// attributes, and ordered children. Keeping the two shapes as separate
/// variants removes any ambiguity between "no children" and "no tag".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HtmlNode {
    /// Raw text content. Renders to its value, or the empty string if absent.
    Leaf {
        /// Text content of the leaf.
        value: Option<String>,
    },
    /// A tagged element such as `<p>` or `<a href="…">`.
    Element {
        /// HTML element name.
        tag: String,
        /// Attributes, serialized in insertion order.
        attrs: Vec<(String, String)>,
        /// Child nodes, rendered in order between the open and close tags.
        children: Vec<HtmlNode>,
    },
}

impl HtmlNode {
    /// Create a leaf node holding the given text.
    #[must_use]
    pub fn leaf(value: impl Into<String>) -> Self {
        Self::Leaf {
            value: Some(value.into()),
        }
    }

    /// Create an element with no attributes.
    #[must_use]
    pub fn element(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children,
        }
    }

    /// Create an element with attributes.
    #[must_use]
    pub fn element_with_attrs(
        tag: impl Into<String>,
        attrs: Vec<(String, String)>,
        children: Vec<HtmlNode>,
    ) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs,
            children,
        }
    }

    /// Render the tree to an HTML string.
    ///
    /// Attributes are emitted in insertion order as `name="value"`, with a
    /// single leading space when any are present. Attribute values are not
    /// escaped. Every element renders both open and close tags; an element
    /// with no children renders with empty content.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MalformedTree`] if an element has an empty
    /// tag. Rendering a leaf never fails.
    pub fn render(&self) -> Result<String, ConvertError> {
        match self {
            Self::Leaf { value } => Ok(value.clone().unwrap_or_default()),
            Self::Element {
                tag,
                attrs,
                children,
            } => {
                if tag.is_empty() {
                    return Err(ConvertError::MalformedTree);
                }
                let mut out = String::new();
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    write!(out, r#" {name}="{value}""#).unwrap();
                }
                out.push('>');
                for child in children {
                    out.push_str(&child.render()?);
                }
                write!(out, "</{tag}>").unwrap();
                Ok(out)
            }
        }
    }
}
