//! Inline tokenizer.
//!
//! Turns a raw text string into an ordered sequence of [`TextSpan`]s by
//! running a fixed pipeline of passes: delimiter splitting for bold,
//! italic and code, then pattern extraction for images and links. Each
//! pass only rewrites spans still marked [`TextSpan::Plain`]; spans typed
//! by an earlier pass are carried through untouched, so nesting across
//! delimiter types is not supported.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;
use crate::node::HtmlNode;
use crate::span::TextSpan;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// Tokenize raw text into typed spans.
///
/// Pass order matters: `**` must run before `*` so bold delimiters are not
/// consumed as pairs of italics, and images must be extracted before links
/// so `![..](..)` cannot be misparsed as a link.
///
/// # Errors
///
/// Returns [`ConvertError::UnclosedDelimiter`] if any delimiter run has no
/// matching close.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    let spans = vec![TextSpan::Plain(text.to_owned())];
    let spans = split_on_delimiter(spans, "**", TextSpan::Bold)?;
    let spans = split_on_delimiter(spans, "*", TextSpan::Italic)?;
    let spans = split_on_delimiter(spans, "`", TextSpan::Code)?;
    let spans = split_on_pattern(spans, &IMAGE_RE, |alt, url| TextSpan::Image { alt, url });
    let spans = split_on_pattern(spans, &LINK_RE, |text, url| TextSpan::Link { text, url });
    Ok(spans)
}

/// Tokenize raw text and convert each span to its HTML node.
pub fn text_to_nodes(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(text_to_spans(text)?.iter().map(TextSpan::to_node).collect())
}

/// Extract all `![alt](url)` image references as `(alt, url)` pairs.
#[must_use]
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
        .collect()
}

/// Extract all `[text](url)` link references as `(text, url)` pairs.
#[must_use]
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    LINK_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
        .collect()
}

/// Split plain spans on a delimiter, alternating plain and `wrap`ped parts.
///
/// Splitting a plain span on the delimiter must yield an odd number of
/// parts (even-indexed parts stay plain, odd-indexed parts are wrapped);
/// an even count means a delimiter was opened but never closed. Empty
/// parts are dropped.
fn split_on_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    wrap: fn(String) -> TextSpan,
) -> Result<Vec<TextSpan>, ConvertError> {
    let mut out = Vec::new();
    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };
        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ConvertError::UnclosedDelimiter { delimiter });
        }
        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::Plain((*part).to_owned()));
            } else {
                out.push(wrap((*part).to_owned()));
            }
        }
    }
    Ok(out)
}

/// Split plain spans on a two-capture pattern (image or link syntax).
///
/// Matches are taken in document order, non-overlapping. Text before each
/// match and after the last one is kept as plain spans when non-empty; a
/// span with no matches passes through unchanged.
fn split_on_pattern(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    wrap: fn(String, String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };
        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let whole = caps.get(0).unwrap();
            if whole.start() > last {
                out.push(TextSpan::Plain(text[last..whole.start()].to_owned()));
            }
            out.push(wrap(caps[1].to_owned(), caps[2].to_owned()));
            last = whole.end();
        }
        if last == 0 {
            out.push(TextSpan::Plain(text));
        } else if last < text.len() {
            out.push(TextSpan::Plain(text[last..].to_owned()));
        }
    }
    out
}
