// src/error.rs
use thiserror::Error;

/// Fatal pipeline errors. None of these is retried or downgraded to a
/// warning: each one means the generated schema cannot be trusted by a
/// downstream sanitizer, so the run aborts before anything is written.
#[derive(Debug, Error)]
pub enum Error {
    /// The caption heuristic must select exactly one table.
    #[error("table caption {caption:?} matched {count} tables, expected exactly 1")]
    AmbiguousTable { caption: String, count: usize },

    /// No name override and no recognized value text.
    #[error("unknown attribute {0:?}: no override and no recognized value text")]
    UnknownAttribute(String),

    /// Rows for one attribute name disagreed about its kind.
    #[error("attribute {name:?} already classified as {have}, but a later row says {got}")]
    ClassificationConflict {
        name: String,
        have: &'static str,
        got: &'static str,
    },

    /// A catalogue name never matched a scraped attribute.
    #[error("catalogue lists {0:?} but no such attribute was scraped")]
    CatalogueTypo(String),

    /// One name in two catalogue sets.
    #[error("attribute {name:?} appears in both the {first} and the {second} catalogue set")]
    CatalogueOverlap {
        name: String,
        first: &'static str,
        second: &'static str,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
