//! Markdown-to-HTML conversion pipeline for mdsite.
//!
//! Converts a constrained markdown dialect into HTML through a fixed
//! pipeline: inline tokenization into typed [`TextSpan`]s, block
//! segmentation and classification, and bottom-up assembly of an
//! [`HtmlNode`] tree that renders to an HTML string.
//!
//! The pipeline is synchronous and purely functional over its input: no
//! shared state, no I/O. Each call is independent, so concurrent
//! conversions over disjoint inputs need no coordination.
//!
//! # Example
//!
//! ```
//! use mdsite_renderer::{extract_title, markdown_to_html};
//!
//! let markdown = "# Title\n\nSome *text*";
//! let html = markdown_to_html(markdown).unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <i>text</i></p></div>");
//! assert_eq!(extract_title(markdown).unwrap(), "Title");
//! ```

mod block;
mod error;
mod inline;
mod node;
mod span;

pub use block::{BlockType, block_to_node, classify, split_blocks};
pub use error::ConvertError;
pub use inline::{extract_images, extract_links, text_to_nodes, text_to_spans};
pub use node::HtmlNode;
pub use span::TextSpan;

/// Convert a markdown document into its HTML node tree.
///
/// Blocks are rendered in document order and wrapped in a single root
/// `<div>` element.
///
/// # Errors
///
/// Returns the first [`ConvertError`] encountered; conversion of the whole
/// document is aborted.
pub fn markdown_to_document(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let children = split_blocks(markdown)
        .iter()
        .map(|block| block_to_node(block))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::element("div", children))
}

/// Convert a markdown document straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    markdown_to_document(markdown)?.render()
}

/// Extract the document title from the first `# ` heading line.
///
/// The scan is line-literal: the line must start with a hash and a space.
/// The remainder of the line is returned trimmed.
///
/// # Errors
///
/// Returns [`ConvertError::NoTitle`] if no such line exists.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_owned())
        .ok_or(ConvertError::NoTitle)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_markdown_to_document_structure() {
        let markdown = "\n# Heading\n\nThis is a paragraph with **bold** and *italic* text.\n\n* List item 1\n* List item 2\n\n1. Ordered item 1\n2. Ordered item 2\n\n> This is a quote\n\n`This is code`\n\n```\nThis is a code block\n```\n";
        let document = markdown_to_document(markdown).unwrap();

        let HtmlNode::Element { tag, children, .. } = &document else {
            panic!("expected root element");
        };
        assert_eq!(tag, "div");
        assert_eq!(children.len(), 7);

        let tags: Vec<&str> = children
            .iter()
            .map(|child| match child {
                HtmlNode::Element { tag, .. } => tag.as_str(),
                HtmlNode::Leaf { .. } => panic!("unexpected leaf at block level"),
            })
            .collect();
        assert_eq!(tags, vec!["h1", "p", "ul", "ol", "blockquote", "p", "pre"]);
    }

    #[test]
    fn test_markdown_to_html() {
        let html = markdown_to_html("# Title\n\nSome *text*").unwrap();
        assert_eq!(html, "<div><h1>Title</h1><p>Some <i>text</i></p></div>");
    }

    #[test]
    fn test_markdown_to_html_code_block() {
        let html = markdown_to_html("```\ncode\n```").unwrap();
        assert_eq!(html, "<div><pre><code>code</code></pre></div>");
    }

    #[test]
    fn test_markdown_to_html_inline_code_paragraph() {
        let html = markdown_to_html("`This is code`").unwrap();
        assert_eq!(html, "<div><p><code>This is code</code></p></div>");
    }

    #[test]
    fn test_markdown_to_html_unclosed_delimiter_aborts() {
        let result = markdown_to_html("fine paragraph\n\nbroken **paragraph");
        assert_eq!(
            result,
            Err(ConvertError::UnclosedDelimiter { delimiter: "**" })
        );
    }

    #[test]
    fn test_markdown_to_html_empty_document() {
        assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(
            extract_title("# My Title\n\nbody").unwrap(),
            "My Title"
        );
    }

    #[test]
    fn test_extract_title_trims_remainder() {
        assert_eq!(extract_title("#  Spaced  \n").unwrap(), "Spaced");
    }

    #[test]
    fn test_extract_title_skips_lower_headings() {
        assert_eq!(
            extract_title("## Not it\n\n# The Title").unwrap(),
            "The Title"
        );
    }

    #[test]
    fn test_extract_title_missing() {
        assert_eq!(extract_title("just a paragraph"), Err(ConvertError::NoTitle));
    }
}
