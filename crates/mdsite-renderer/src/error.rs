//! Conversion error types.

/// Error produced while converting markdown to HTML.
///
/// All errors are fail-fast: the first one aborts conversion of the whole
/// document and propagates to the caller. Nothing is retried and no partial
/// output is produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// An inline delimiter run (`**`, `*` or `` ` ``) was never closed.
    #[error("unclosed `{delimiter}` delimiter in inline text")]
    UnclosedDelimiter {
        /// The delimiter that was left open.
        delimiter: &'static str,
    },

    /// An element node was rendered without a tag. Indicates a tree
    /// construction bug rather than bad input.
    #[error("cannot render an element node without a tag")]
    MalformedTree,

    /// No level-1 heading line was found to use as the document title.
    #[error("no h1 heading found in document")]
    NoTitle,
}
