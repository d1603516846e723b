use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::{info, warn};

use trivia_client::{JServiceClient, TriviaGame};
use trivia_common::models::CellKey;

use crate::Tui;
use crate::ui::{self, GridGeometry};

/// What the board area is currently doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Playing,
    Failed(String),
}

pub struct App {
    pub game: TriviaGame<JServiceClient>,
    pub phase: Phase,
    pub cursor: CellKey,
    pub geometry: GridGeometry,
    should_quit: bool,
    restart_requested: bool,
}

impl App {
    pub fn new(game: TriviaGame<JServiceClient>) -> Self {
        Self {
            game,
            phase: Phase::Loading,
            cursor: CellKey::new(0, 0),
            geometry: GridGeometry::default(),
            should_quit: false,
            restart_requested: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        // The first board loads right away, before any input is handled
        self.load_board(terminal).await?;

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code);
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if self.restart_requested {
                self.restart_requested = false;
                self.load_board(terminal).await?;
            }
        }

        Ok(())
    }

    /// Draw the loading view, run the load to completion, then drop any
    /// input that piled up while it ran.
    async fn load_board(&mut self, terminal: &mut Tui) -> Result<()> {
        self.phase = Phase::Loading;
        terminal.draw(|frame| ui::draw(frame, self))?;

        match self.game.start().await {
            Ok(()) => {
                self.cursor = CellKey::new(0, 0);
                self.phase = Phase::Playing;
            }
            Err(e) => {
                warn!("Board load failed: {}", e);
                self.phase = Phase::Failed(e.to_string());
            }
        }

        // Clicks made while the board was loading are discarded
        while event::poll(Duration::from_millis(0))? {
            let _ = event::read()?;
        }

        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                info!("New board requested");
                self.restart_requested = true;
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(key) = self.geometry.cell_at(mouse.column, mouse.row) {
            self.cursor = key;
            self.click(key);
        }
    }

    fn click(&mut self, key: CellKey) {
        // the game ignores clicks without a board or outside of it
        let outcome = self.game.click(key);
        if outcome.has_update() {
            info!("Cell {} -> {:?}", key, outcome);
        }
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let Some(board) = self.game.board() else {
            return;
        };
        self.cursor = step(
            self.cursor,
            dx,
            dy,
            board.category_count(),
            board.clue_rows(),
        );
    }
}

/// Move one step in a direction, wrapping around the board edges.
fn step(cursor: CellKey, dx: i32, dy: i32, columns: usize, rows: usize) -> CellKey {
    if columns == 0 || rows == 0 {
        return cursor;
    }

    CellKey::new(
        (cursor.category as i32 + dx).rem_euclid(columns as i32) as usize,
        (cursor.clue as i32 + dy).rem_euclid(rows as i32) as usize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_cursor_wraps_around_the_board() {
        let origin = CellKey::new(0, 0);

        assert_eq!(step(origin, -1, 0, 6, 5), CellKey::new(5, 0));
        assert_eq!(step(origin, 0, -1, 6, 5), CellKey::new(0, 4));
        assert_eq!(step(CellKey::new(5, 4), 1, 0, 6, 5), CellKey::new(0, 4));
        assert_eq!(step(CellKey::new(5, 4), 0, 1, 6, 5), CellKey::new(5, 0));
        assert_eq!(step(CellKey::new(2, 3), 1, 0, 6, 5), CellKey::new(3, 3));
    }

    #[test]
    fn the_cursor_stays_put_on_an_empty_board() {
        let origin = CellKey::new(0, 0);
        assert_eq!(step(origin, 1, 1, 0, 0), origin);
    }
}
