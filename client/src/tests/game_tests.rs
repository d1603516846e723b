use trivia_common::api::{CategoryDetail, ClueRecord};
use trivia_common::models::{CategoryId, CellKey, GameParams, RevealState};

use super::fakes::{FakeSource, RecordingView};
use crate::{ClickOutcome, TriviaGame};

fn params(categories: usize, clues_per_category: usize, category_pool: usize) -> GameParams {
    GameParams {
        categories,
        clues_per_category,
        category_pool,
    }
}

async fn loaded_game() -> TriviaGame<FakeSource> {
    let source = FakeSource::uniform(10, 5);
    let mut game = TriviaGame::new(source, params(3, 2, 10));
    game.start().await.unwrap();
    game
}

#[tokio::test]
async fn click_walks_a_cell_through_its_lifecycle() {
    // single-cell board with a known clue
    let mut source = FakeSource::uniform(1, 1);
    source.set_detail(
        CategoryId(100),
        CategoryDetail {
            title: "arithmetic".to_string(),
            clues: vec![ClueRecord {
                question: "2+2".to_string(),
                answer: "4".to_string(),
                value: Some(100),
            }],
        },
    );
    let mut game = TriviaGame::new(source, params(1, 1, 1));
    game.start().await.unwrap();

    let key = CellKey::new(0, 0);
    let text =
        |game: &TriviaGame<FakeSource>| game.board().unwrap().clue(key).unwrap().display_text();

    assert_eq!(text(&game), "?");
    assert_eq!(game.click(key), ClickOutcome::QuestionShown);
    assert_eq!(text(&game), "2+2");
    assert_eq!(game.click(key), ClickOutcome::AnswerShown);
    assert_eq!(text(&game), "4 - 100");
    assert_eq!(game.click(key), ClickOutcome::NoChange);
    assert_eq!(text(&game), "4 - 100");
}

#[tokio::test]
async fn clicks_only_touch_the_addressed_cell() {
    let mut game = loaded_game().await;
    let target = CellKey::new(1, 1);

    assert!(game.click(target).has_update());

    let board = game.board().unwrap();
    for key in board.keys() {
        let state = board.clue(key).unwrap().state;
        if key == target {
            assert_eq!(state, RevealState::QuestionShown);
        } else {
            assert_eq!(state, RevealState::Hidden, "cell {key} changed");
        }
    }
}

#[tokio::test]
async fn clicks_before_a_board_loads_are_ignored() {
    let source = FakeSource::uniform(10, 5);
    let mut game = TriviaGame::new(source, params(3, 2, 10));

    assert!(!game.is_loaded());
    assert_eq!(game.click(CellKey::new(0, 0)), ClickOutcome::NoChange);
    assert!(game.board().is_none());
}

#[tokio::test]
async fn clicks_outside_the_board_are_ignored() {
    let mut game = loaded_game().await;

    assert_eq!(game.click(CellKey::new(3, 0)), ClickOutcome::NoChange);
    assert_eq!(game.click(CellKey::new(0, 2)), ClickOutcome::NoChange);
}

#[tokio::test]
async fn restart_replaces_the_board_wholesale() {
    let mut game = loaded_game().await;
    game.click(CellKey::new(0, 0));
    game.click(CellKey::new(0, 0));
    game.click(CellKey::new(2, 1));

    game.start().await.unwrap();

    let board = game.board().unwrap();
    assert_eq!(board.category_count(), 3);
    for key in board.keys() {
        assert_eq!(board.clue(key).unwrap().state, RevealState::Hidden);
    }
}

#[tokio::test]
async fn a_failed_restart_keeps_the_previous_board() {
    let source = FakeSource::uniform(10, 5);
    let fail = source.fail_with.clone();
    let mut game = TriviaGame::new(source, params(3, 2, 10));
    game.start().await.unwrap();
    game.click(CellKey::new(1, 0));

    *fail.lock().unwrap() = Some("service unavailable".to_string());
    game.start().await.unwrap_err();

    // the half-played board is still there, untouched
    let board = game.board().unwrap();
    assert_eq!(
        board.clue(CellKey::new(1, 0)).unwrap().state,
        RevealState::QuestionShown
    );
}

#[tokio::test]
async fn the_loading_view_brackets_every_load() {
    let source = FakeSource::uniform(10, 5);
    let fail = source.fail_with.clone();
    let view = RecordingView::default();
    let events = view.events.clone();

    let mut game = TriviaGame::new(source, params(3, 2, 10)).with_loading_view(Box::new(view));

    game.start().await.unwrap();
    assert_eq!(*events.lock().unwrap(), vec!["enter", "exit"]);

    // the exit hook fires on failure too
    *fail.lock().unwrap() = Some("gone".to_string());
    game.start().await.unwrap_err();
    assert_eq!(*events.lock().unwrap(), vec!["enter", "exit", "enter", "exit"]);
}
