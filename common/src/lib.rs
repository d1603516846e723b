//! Shared types for the trivia board game: the board domain model and the
//! wire format of the jService-style remote source.

pub mod api;
pub mod models;
