//! Typed inline text spans.
//!
//! The inline tokenizer flattens raw text into an ordered sequence of
//! [`TextSpan`]s, each of which maps one-to-one onto an [`HtmlNode`].

use crate::node::HtmlNode;

/// A typed fragment of inline text, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSpan {
    /// Unformatted text.
    Plain(String),
    /// Text delimited by `**`.
    Bold(String),
    /// Text delimited by `*`.
    Italic(String),
    /// Text delimited by `` ` ``.
    Code(String),
    /// A `[text](url)` link.
    Link {
        /// Link text.
        text: String,
        /// Link target.
        url: String,
    },
    /// An `![alt](url)` image reference.
    Image {
        /// Alternative text.
        alt: String,
        /// Image source.
        url: String,
    },
}

impl TextSpan {
    /// Convert this span into its HTML node form.
    ///
    /// Plain text becomes a bare leaf; formatted spans wrap their text in
    /// the matching element. Images carry `src` and `alt` attributes and
    /// have no children.
    #[must_use]
    pub fn to_node(&self) -> HtmlNode {
        match self {
            Self::Plain(text) => HtmlNode::leaf(text.clone()),
            Self::Bold(text) => HtmlNode::element("b", vec![HtmlNode::leaf(text.clone())]),
            Self::Italic(text) => HtmlNode::element("i", vec![HtmlNode::leaf(text.clone())]),
            Self::Code(text) => HtmlNode::element("code", vec![HtmlNode::leaf(text.clone())]),
            Self::Link { text, url } => HtmlNode::element_with_attrs(
                "a",
                vec![("href".to_owned(), url.clone())],
                vec![HtmlNode::leaf(text.clone())],
            ),
            Self::Image { alt, url } => HtmlNode::element_with_attrs(
                "img",
                vec![("src".to_owned(), url.clone()), ("alt".to_owned(), alt.clone())],
                Vec::new(),
            ),
        }
    }
}
