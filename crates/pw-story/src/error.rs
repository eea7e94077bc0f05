//! Error types for story parsing and loading.

use std::path::PathBuf;

use thiserror::Error;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while loading or parsing a story.
///
/// Every failure is terminal for the load attempt; no partially built
/// [`Story`](crate::Story) is ever handed to the caller. Weighted
/// transitions with unparseable or all-zero weights are *not* errors —
/// the resolver reports those as "no automatic result".
#[derive(Debug, Error)]
pub enum StoryError {
    /// The file could not be read.
    #[error("error reading file: {}", .path.display())]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The first line matches neither magic marker.
    #[error("first line: {0} does not correspond to known value")]
    UnrecognizedHeader(String),

    /// A bookmark file ended before its story path and room id.
    #[error("bookmark file {} is missing its story path or room id", .0.display())]
    TruncatedBookmark(PathBuf),

    /// A line matched no rule of the story grammar.
    #[error("error parsing file on line: {line}: {text}")]
    MalformedLine {
        /// 1-based count of lines consumed, not counting the magic line.
        line: usize,
        /// The offending trimmed line.
        text: String,
    },

    /// The rooms and transitions did not come out parallel, non-empty,
    /// and well-formed.
    #[error("rooms or transitions not properly parsed: {0}")]
    StructuralInconsistency(String),
}
