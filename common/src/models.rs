use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a category at the remote trivia source.
///
/// Only used while a board is being loaded; a finished board addresses
/// everything by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board dimensions and the size of the category pool to sample from.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct GameParams {
    pub categories: usize,
    pub clues_per_category: usize,
    pub category_pool: usize,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            categories: 6,
            clues_per_category: 5,
            category_pool: 100,
        }
    }
}

/// How much of a clue is currently visible.
///
/// Clicks move a cell strictly forward: hidden cells show their question,
/// question cells show their answer, answered cells stay as they are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    #[serde(rename = "hidden")]
    Hidden,
    #[serde(rename = "question")]
    QuestionShown,
    #[serde(rename = "answer")]
    AnswerShown,
}

impl RevealState {
    /// The state reached by one more click on the cell.
    pub fn next(self) -> RevealState {
        match self {
            RevealState::Hidden => RevealState::QuestionShown,
            RevealState::QuestionShown => RevealState::AnswerShown,
            RevealState::AnswerShown => RevealState::AnswerShown,
        }
    }

    /// Whether further clicks leave the cell unchanged.
    pub fn is_terminal(self) -> bool {
        matches!(self, RevealState::AnswerShown)
    }
}

/// A single clue cell on the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub value: u32,
    #[serde(default)]
    pub state: RevealState,
}

impl Clue {
    /// Create a clue in its hidden state
    pub fn new(question: String, answer: String, value: u32) -> Self {
        Self {
            question,
            answer,
            value,
            state: RevealState::Hidden,
        }
    }

    /// Text a board cell displays for the clue's current state
    pub fn display_text(&self) -> String {
        match self.state {
            RevealState::Hidden => "?".to_string(),
            RevealState::QuestionShown => self.question.clone(),
            RevealState::AnswerShown => format!("{} - {}", self.answer, self.value),
        }
    }
}

/// One column of the board: a category title and its clues, top to bottom.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

/// Key of a single body cell, written `"{category}-{clue}"`.
///
/// Both indices are zero-based positions on the board, not identifiers at
/// the remote source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellKey {
    pub category: usize,
    pub clue: usize,
}

impl CellKey {
    pub fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid cell key `{0}`, expected `<category>-<clue>`")]
pub struct ParseCellKeyError(String);

impl FromStr for CellKey {
    type Err = ParseCellKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, clue) = s
            .split_once('-')
            .ok_or_else(|| ParseCellKeyError(s.to_string()))?;
        let category = category
            .parse()
            .map_err(|_| ParseCellKeyError(s.to_string()))?;
        let clue = clue.parse().map_err(|_| ParseCellKeyError(s.to_string()))?;
        Ok(Self { category, clue })
    }
}

/// A fully loaded trivia board.
///
/// Categories keep the order they were loaded in, which is also the order
/// they are displayed in. A board is only ever replaced wholesale, never
/// resized in place.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    pub categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Get the clue at the given cell, if the key is on the board
    pub fn clue(&self, key: CellKey) -> Option<&Clue> {
        self.categories.get(key.category)?.clues.get(key.clue)
    }

    /// Mutable access to the clue at the given cell
    pub fn clue_mut(&mut self, key: CellKey) -> Option<&mut Clue> {
        self.categories.get_mut(key.category)?.clues.get_mut(key.clue)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of clue rows; uniform across categories by construction.
    pub fn clue_rows(&self) -> usize {
        self.categories
            .first()
            .map_or(0, |category| category.clues.len())
    }

    /// Every cell key on the board, column by column.
    pub fn keys(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.categories
            .iter()
            .enumerate()
            .flat_map(|(category, c)| (0..c.clues.len()).map(move |clue| CellKey { category, clue }))
    }
}
