//! Trivia Board Client Library
//!
//! This library builds Jeopardy-style trivia boards from a jService-compatible
//! API and tracks the reveal state of every cell: a hidden cell shows `?`,
//! the first click shows the question, the second shows the answer and value.
//!
//! ## Usage
//!
//! ### High-Level Interface (Recommended)
//!
//! The `TriviaGame` struct owns the board and runs the whole lifecycle:
//!
//! ```rust,no_run
//! use trivia_client::{CellKey, GameParams, JServiceClient, TriviaGame};
//!
//! #[tokio::main]
//! async fn main() -> trivia_client::Result<()> {
//!     let source = JServiceClient::new("https://jservice.io")?;
//!     let mut game = TriviaGame::new(source, GameParams::default());
//!
//!     // Fetch six random categories with five random clues each
//!     game.start().await?;
//!
//!     // First click shows the question, the second the answer
//!     let key = CellKey::new(0, 0);
//!     game.click(key);
//!     game.click(key);
//!
//!     if let Some(board) = game.board() {
//!         println!("{}", board.clue(key).unwrap().display_text());
//!     }
//!
//!     // Restart: the old board is replaced wholesale
//!     game.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! ### Low-Level Interface
//!
//! For more control, the loader functions can be driven directly against any
//! `TriviaSource` implementation:
//!
//! ```rust,no_run
//! use trivia_client::{GameParams, JServiceClient, load_board};
//!
//! #[tokio::main]
//! async fn main() -> trivia_client::Result<()> {
//!     let source = JServiceClient::new("https://jservice.io")?;
//!     let board = load_board(&source, &GameParams::default()).await?;
//!
//!     for category in &board.categories {
//!         println!("{} ({} clues)", category.title, category.clues.len());
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod game;
mod loader;
mod source;

#[cfg(test)]
mod tests;

pub use client::{DEFAULT_API_URL, JServiceClient};
pub use error::Error;
pub use game::{ClickOutcome, LoadingView, SilentView, TriviaGame};
pub use loader::{load_board, load_category, select_category_ids};
pub use source::TriviaSource;

// Re-export common types for convenience
pub use trivia_common::{api::*, models::*};

pub type Result<T> = std::result::Result<T, Error>;
