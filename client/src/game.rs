use tracing::{debug, info, warn};

use trivia_common::models::{Board, CellKey, GameParams, RevealState};

use crate::source::TriviaSource;
use crate::{Result, loader};

/// Presentation hooks bracketing a board load.
///
/// [`TriviaGame::start`] calls `enter_loading` before the first fetch and
/// `exit_loading` once loading has finished, whether it succeeded or
/// failed. Both default to doing nothing, so a view only implements what
/// it cares about.
pub trait LoadingView: Send {
    fn enter_loading(&mut self) {}
    fn exit_loading(&mut self) {}
}

/// Loading view that shows nothing.
#[derive(Debug, Default)]
pub struct SilentView;

impl LoadingView for SilentView {}

/// Result of a single click on a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click changed nothing: no board yet, key off the board, or the
    /// cell had already shown its answer.
    NoChange,
    /// The cell now shows its question.
    QuestionShown,
    /// The cell now shows its answer and value; it is spent.
    AnswerShown,
}

impl ClickOutcome {
    /// Whether the click changed the board.
    pub fn has_update(self) -> bool {
        !matches!(self, ClickOutcome::NoChange)
    }
}

/// High-level trivia game that owns the board and its reveal state.
///
/// The game holds at most one board. [`start`](Self::start) loads a fresh
/// one and swaps it in wholesale; [`click`](Self::click) advances a single
/// cell. There is no other way to mutate the board.
pub struct TriviaGame<S> {
    source: S,
    params: GameParams,
    board: Option<Board>,
    view: Box<dyn LoadingView>,
}

impl<S: TriviaSource> TriviaGame<S> {
    /// Create a game that loads its boards from `source`.
    pub fn new(source: S, params: GameParams) -> Self {
        Self {
            source,
            params,
            board: None,
            view: Box::new(SilentView),
        }
    }

    /// Install a loading view to be notified around board loads.
    pub fn with_loading_view(mut self, view: Box<dyn LoadingView>) -> Self {
        self.view = view;
        self
    }

    /// Load a fresh board, replacing the current one.
    ///
    /// Used both for the initial load and for restarts. On failure the
    /// previous board (or the absence of one) is kept untouched; a board
    /// is only ever swapped out for a complete replacement.
    pub async fn start(&mut self) -> Result<()> {
        info!(
            "Starting game: {} categories with {} clues each",
            self.params.categories, self.params.clues_per_category
        );

        self.view.enter_loading();
        let result = loader::load_board(&self.source, &self.params).await;
        self.view.exit_loading();

        match result {
            Ok(board) => {
                info!("Board loaded with {} categories", board.category_count());
                self.board = Some(board);
                Ok(())
            }
            Err(e) => {
                warn!("Board load failed: {}", e);
                Err(e)
            }
        }
    }

    /// Advance the reveal state of the cell at `key`.
    ///
    /// Clicks before a board has loaded, on keys outside the board, or on
    /// spent cells change nothing. A click never affects any other cell.
    pub fn click(&mut self, key: CellKey) -> ClickOutcome {
        let Some(board) = self.board.as_mut() else {
            debug!("Ignoring click at {} before a board is loaded", key);
            return ClickOutcome::NoChange;
        };

        let Some(clue) = board.clue_mut(key) else {
            warn!("Ignoring click at {} outside the board", key);
            return ClickOutcome::NoChange;
        };

        match clue.state {
            RevealState::Hidden => {
                clue.state = RevealState::QuestionShown;
                debug!("Cell {} shows its question", key);
                ClickOutcome::QuestionShown
            }
            RevealState::QuestionShown => {
                clue.state = RevealState::AnswerShown;
                debug!("Cell {} shows its answer", key);
                ClickOutcome::AnswerShown
            }
            RevealState::AnswerShown => {
                debug!("Ignoring click on spent cell {}", key);
                ClickOutcome::NoChange
            }
        }
    }

    /// The current board, if one has been loaded.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Whether a board is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.board.is_some()
    }

    /// Parameters used for board loads.
    pub fn params(&self) -> &GameParams {
        &self.params
    }
}
