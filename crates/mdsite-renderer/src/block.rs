//! Block segmentation, classification, and rendering.
//!
//! A document is split into blocks on blank-line boundaries, each block is
//! classified by structural type, and a block-specific renderer produces
//! the corresponding [`HtmlNode`] subtree, calling the inline tokenizer
//! for any inline content.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;
use crate::inline::text_to_nodes;
use crate::node::HtmlNode;

static BLANK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s").unwrap());
static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Structural classification of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockType {
    /// `#` to `######` heading.
    Heading,
    /// Fenced code block.
    Code,
    /// Blockquote, every line prefixed with `>`.
    Quote,
    /// List with `*` or `-` markers.
    UnorderedList,
    /// List with `1.`, `2.`, … markers, numbered consecutively from 1.
    OrderedList,
    /// Anything else.
    Paragraph,
}

/// Split a document into blocks on one-or-more blank lines.
///
/// Each block is trimmed of surrounding whitespace; blocks that are empty
/// after trimming are dropped. Order is preserved.
#[must_use]
pub fn split_blocks(markdown: &str) -> Vec<String> {
    BLANK_LINE_RE
        .split(markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Classify a block, first match wins.
///
/// An ordered list must be numbered exactly 1..=n; a list starting at any
/// other number, or with a gap, or out of order falls through to
/// [`BlockType::Paragraph`].
#[must_use]
pub fn classify(block: &str) -> BlockType {
    if HEADING_RE.is_match(block) {
        return BlockType::Heading;
    }
    if block.len() >= 6 && block.starts_with("```") && block.ends_with("```") {
        return BlockType::Code;
    }
    if block.lines().all(|line| line.trim().starts_with('>')) {
        return BlockType::Quote;
    }
    if block.lines().all(|line| line.trim().starts_with(['*', '-'])) {
        return BlockType::UnorderedList;
    }
    let ordered = block.lines().enumerate().all(|(i, line)| {
        let line = line.trim();
        ORDERED_ITEM_RE.is_match(line)
            && line
                .split('.')
                .next()
                .and_then(|n| n.parse::<usize>().ok())
                == Some(i + 1)
    });
    if ordered {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

/// Render a single block to its HTML subtree.
pub fn block_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    match classify(block) {
        BlockType::Paragraph => paragraph_node(block),
        BlockType::Heading => heading_node(block),
        BlockType::Code => Ok(code_node(block)),
        BlockType::Quote => quote_node(block),
        BlockType::UnorderedList => unordered_list_node(block),
        BlockType::OrderedList => ordered_list_node(block),
    }
}

fn paragraph_node(block: &str) -> Result<HtmlNode, ConvertError> {
    Ok(HtmlNode::element("p", text_to_nodes(block)?))
}

fn heading_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let level = block.chars().take_while(|c| *c == '#').count();
    let text = block.trim_start_matches('#').trim();
    Ok(HtmlNode::element(format!("h{level}"), text_to_nodes(text)?))
}

/// No inline tokenization is applied to code content. Stripping removes
/// every leading and trailing backtick, not just the fence markers.
fn code_node(block: &str) -> HtmlNode {
    let content = block.trim_matches('`').trim();
    HtmlNode::element(
        "pre",
        vec![HtmlNode::element("code", vec![HtmlNode::leaf(content)])],
    )
}

fn quote_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let inner = block
        .lines()
        .map(|line| line.trim_start_matches('>').trim())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::element("blockquote", vec![paragraph_node(&inner)?]))
}

fn unordered_list_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let items = block
        .lines()
        .map(|line| list_item(line.trim_start_matches(['*', '-']).trim()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::element("ul", items))
}

fn ordered_list_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let items = block
        .lines()
        .map(|line| {
            let text = line.split_once('.').map_or("", |(_, rest)| rest).trim();
            list_item(text)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::element("ol", items))
}

fn list_item(text: &str) -> Result<HtmlNode, ConvertError> {
    Ok(HtmlNode::element("li", text_to_nodes(text)?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_blocks() {
        let markdown = "\nThis is **bolded** paragraph\n\nThis is another paragraph with *italic* text and `code` here\nThis is the same paragraph on a new line\n\n* This is a list\n* with items\n\n";
        assert_eq!(
            split_blocks(markdown),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with *italic* text and `code` here\nThis is the same paragraph on a new line",
                "* This is a list\n* with items",
            ]
        );
    }

    #[test]
    fn test_split_blocks_collapses_blank_runs() {
        assert_eq!(split_blocks("a\n\n\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_blocks_idempotent_on_rejoin() {
        let blocks = split_blocks("# Title\n\npara one\n\n* a\n* b\n\n> q");
        let rejoined = blocks.join("\n\n");
        assert_eq!(split_blocks(&rejoined), blocks);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("This is a paragraph"), BlockType::Paragraph);
        assert_eq!(classify("# Heading"), BlockType::Heading);
        assert_eq!(classify("## Heading 2"), BlockType::Heading);
        assert_eq!(classify("```\ncode block\n```"), BlockType::Code);
        assert_eq!(classify("> Quote\n> Multiple lines"), BlockType::Quote);
        assert_eq!(classify("* Item 1\n* Item 2"), BlockType::UnorderedList);
        assert_eq!(classify("- Item 1\n- Item 2"), BlockType::UnorderedList);
        assert_eq!(classify("1. First\n2. Second"), BlockType::OrderedList);
    }

    #[test]
    fn test_classify_heading_requires_space() {
        assert_eq!(classify("#NoSpace"), BlockType::Paragraph);
        assert_eq!(classify("####### Seven"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_broken_list_line_is_paragraph() {
        assert_eq!(
            classify("* Item 1\nnot a list line"),
            BlockType::Paragraph
        );
    }

    #[test]
    fn test_classify_ordered_list_must_start_at_one() {
        assert_eq!(classify("2. x\n3. y"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list_gap_is_paragraph() {
        assert_eq!(classify("1. x\n3. y"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list_out_of_order_is_paragraph() {
        assert_eq!(classify("2. x\n1. y"), BlockType::Paragraph);
    }

    #[test]
    fn test_heading_node_level() {
        let node = block_to_node("### Third level").unwrap();
        assert_eq!(node.render().unwrap(), "<h3>Third level</h3>");
    }

    #[test]
    fn test_paragraph_node_with_inline() {
        let node = block_to_node("Some *text*").unwrap();
        assert_eq!(node.render().unwrap(), "<p>Some <i>text</i></p>");
    }

    #[test]
    fn test_code_node_strips_fences_and_whitespace() {
        let node = block_to_node("```\ncode\n```").unwrap();
        assert_eq!(node.render().unwrap(), "<pre><code>code</code></pre>");
    }

    #[test]
    fn test_code_node_no_inline_tokenization() {
        let node = block_to_node("```\na **b** c\n```").unwrap();
        assert_eq!(node.render().unwrap(), "<pre><code>a **b** c</code></pre>");
    }

    #[test]
    fn test_quote_node() {
        let node = block_to_node("> line one\n> line two").unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<blockquote><p>line one\nline two</p></blockquote>"
        );
    }

    #[test]
    fn test_unordered_list_node() {
        let node = block_to_node("* first\n- second **bold**").unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<ul><li>first</li><li>second <b>bold</b></li></ul>"
        );
    }

    #[test]
    fn test_ordered_list_node() {
        let node = block_to_node("1. first\n2. second *em*").unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<ol><li>first</li><li>second <i>em</i></li></ol>"
        );
    }

    #[test]
    fn test_unclosed_delimiter_propagates() {
        assert_eq!(
            block_to_node("a **b"),
            Err(ConvertError::UnclosedDelimiter { delimiter: "**" })
        );
    }
}
