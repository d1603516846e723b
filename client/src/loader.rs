use rand::seq::IndexedRandom;
use tracing::{debug, info};

use trivia_common::api::ClueRecord;
use trivia_common::models::{Board, Category, CategoryId, Clue, GameParams};

use crate::source::TriviaSource;
use crate::{Error, Result};

/// Draw the category ids a new board will use.
///
/// Requests `params.category_pool` categories and samples
/// `params.categories` distinct ids from whatever the source actually
/// returned, uniformly and without replacement. A pool smaller than the
/// sample is an error rather than a smaller board.
pub async fn select_category_ids<S: TriviaSource>(
    source: &S,
    params: &GameParams,
) -> Result<Vec<CategoryId>> {
    let pool = source.category_pool(params.category_pool).await?;

    if pool.len() < params.categories {
        return Err(Error::InsufficientCategories {
            requested: params.categories,
            available: pool.len(),
        });
    }

    let mut rng = rand::rng();
    let ids: Vec<CategoryId> = pool
        .choose_multiple(&mut rng, params.categories)
        .map(|record| record.id)
        .collect();

    debug!("Selected {} categories from a pool of {}", ids.len(), pool.len());
    Ok(ids)
}

/// Load one category and sample its clue column.
///
/// Picks `clues_per_category` distinct clues without replacement; every
/// sampled clue starts out hidden. Clues without a dollar value load as 0.
pub async fn load_category<S: TriviaSource>(
    source: &S,
    id: CategoryId,
    clues_per_category: usize,
) -> Result<Category> {
    let detail = source.category(id).await?;

    if detail.clues.len() < clues_per_category {
        return Err(Error::InsufficientClues {
            category: id,
            requested: clues_per_category,
            available: detail.clues.len(),
        });
    }

    let mut rng = rand::rng();
    let clues: Vec<Clue> = detail
        .clues
        .choose_multiple(&mut rng, clues_per_category)
        .map(clue_from_record)
        .collect();

    debug!("Loaded category {} ({})", id, detail.title);
    Ok(Category {
        title: detail.title,
        clues,
    })
}

/// Build a complete board: pick the categories, then load them one by one.
///
/// The per-category fetches run strictly in sequence and the board keeps
/// the order in which the ids were drawn. Any failure aborts the whole
/// load; no partial board is ever returned.
pub async fn load_board<S: TriviaSource>(source: &S, params: &GameParams) -> Result<Board> {
    let ids = select_category_ids(source, params).await?;
    info!("Loading board with {} categories", ids.len());

    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        let category = load_category(source, id, params.clues_per_category).await?;
        categories.push(category);
    }

    Ok(Board::new(categories))
}

fn clue_from_record(record: &ClueRecord) -> Clue {
    Clue::new(
        record.question.clone(),
        record.answer.clone(),
        record.value.unwrap_or(0),
    )
}
