use async_trait::async_trait;

use trivia_common::api::{CategoryDetail, CategoryRecord};
use trivia_common::models::CategoryId;

use crate::Result;

/// Remote source of trivia categories and clues.
///
/// The two queries mirror the jService API: a bulk listing used as the
/// sampling pool, and a per-category fetch returning its clues. The board
/// loader is written against this trait so it can run against an in-memory
/// source in tests.
#[async_trait]
pub trait TriviaSource: Send + Sync {
    /// Fetch up to `count` categories to sample from.
    ///
    /// The source may return fewer than requested; the loader decides
    /// whether that is still enough.
    async fn category_pool(&self, count: usize) -> Result<Vec<CategoryRecord>>;

    /// Fetch one category with all of its clues.
    async fn category(&self, id: CategoryId) -> Result<CategoryDetail>;
}
