use thiserror::Error;

use trivia_common::models::CategoryId;

/// Errors produced while talking to the trivia source or assembling a board.
///
/// There is no retry and no partial result: whichever of these occurs first
/// aborts the whole load and leaves the caller's board as it was.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure from the HTTP client, including non-success
    /// status codes.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid api url: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// The category pool was smaller than the number of categories to draw.
    #[error("source returned {available} categories, need {requested}")]
    InsufficientCategories { requested: usize, available: usize },

    /// A category held fewer clues than a board column needs.
    #[error("category {category} has {available} clues, need {requested}")]
    InsufficientClues {
        category: CategoryId,
        requested: usize,
        available: usize,
    },

    /// Failure reported by a source implementation not backed by HTTP.
    #[error("source error: {0}")]
    Source(Box<dyn std::error::Error + Send + Sync>),
}
