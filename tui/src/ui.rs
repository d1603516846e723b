use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use trivia_common::models::{Board, CellKey};

use crate::app::{App, Phase};

const HEADER_HEIGHT: u16 = 3;

/// Screen layout of the board grid.
///
/// Computed from the area the board is drawn into; [`cell_at`](Self::cell_at)
/// is the inverse mapping used to turn mouse clicks into cell keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridGeometry {
    headers: Vec<Rect>,
    cells: Vec<(CellKey, Rect)>,
}

impl GridGeometry {
    /// Split `area` into a header row and `columns` x `rows` body cells.
    pub fn compute(area: Rect, columns: usize, rows: usize) -> Self {
        if columns == 0 || rows == 0 || area.width == 0 || area.height == 0 {
            return Self::default();
        }

        let mut row_constraints = Vec::with_capacity(rows + 1);
        row_constraints.push(Constraint::Length(HEADER_HEIGHT));
        row_constraints.extend((0..rows).map(|_| Constraint::Fill(1)));
        let row_areas = Layout::vertical(row_constraints).split(area);

        let column_constraints: Vec<Constraint> =
            (0..columns).map(|_| Constraint::Fill(1)).collect();
        let headers = Layout::horizontal(column_constraints.clone())
            .split(row_areas[0])
            .to_vec();

        let mut cells = Vec::with_capacity(columns * rows);
        for (row, row_area) in row_areas.iter().skip(1).enumerate() {
            let column_areas = Layout::horizontal(column_constraints.clone()).split(*row_area);
            for (column, cell_area) in column_areas.iter().enumerate() {
                cells.push((CellKey::new(column, row), *cell_area));
            }
        }

        Self { headers, cells }
    }

    /// The body cell under a screen position, if any.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<CellKey> {
        self.cells
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(x, y)))
            .map(|(key, _)| *key)
    }

    fn header(&self, column: usize) -> Option<Rect> {
        self.headers.get(column).copied()
    }

    fn cells(&self) -> impl Iterator<Item = (CellKey, Rect)> + '_ {
        self.cells.iter().copied()
    }
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [title_area, board_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_title(frame, title_area);

    let (columns, rows) = app
        .game
        .board()
        .map_or((0, 0), |board| (board.category_count(), board.clue_rows()));
    app.geometry = GridGeometry::compute(board_area, columns, rows);

    match app.game.board() {
        Some(board) => draw_board(frame, board, &app.geometry, app.cursor),
        None => draw_empty(frame, board_area),
    }

    draw_status(frame, status_area, &app.phase);

    if app.phase == Phase::Loading {
        draw_loading_popup(frame, board_area);
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Trivia Board")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, area);
}

fn draw_board(frame: &mut Frame, board: &Board, geometry: &GridGeometry, cursor: CellKey) {
    for (column, category) in board.categories.iter().enumerate() {
        let Some(area) = geometry.header(column) else {
            continue;
        };
        let header = Paragraph::new(category.title.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    for (key, area) in geometry.cells() {
        let Some(clue) = board.clue(key) else {
            continue;
        };

        let mut style = Style::default();
        if clue.state.is_terminal() {
            // the classic green of an answered cell
            style = style.bg(Color::Green).fg(Color::Black);
        }

        let mut block = Block::default().borders(Borders::ALL);
        if key == cursor {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        let cell = Paragraph::new(clue.display_text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(style)
            .block(block);
        frame.render_widget(cell, area);
    }
}

fn draw_empty(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("No board loaded")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, area);
}

fn draw_status(frame: &mut Frame, area: Rect, phase: &Phase) {
    let line = match phase {
        Phase::Loading => Line::from("Loading..."),
        Phase::Playing => Line::from(vec![
            Span::styled("click/Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" reveal  "),
            Span::styled("arrows/hjkl", Style::default().fg(Color::Cyan)),
            Span::raw(" move  "),
            Span::styled("r", Style::default().fg(Color::Cyan)),
            Span::raw(" new board  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]),
        Phase::Failed(message) => Line::from(vec![
            Span::styled(
                format!("Load failed: {message}"),
                Style::default().fg(Color::Red),
            ),
            Span::raw("  r retry  q quit"),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_loading_popup(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(34, 20, area);
    frame.render_widget(Clear, popup);

    let message = Paragraph::new("Loading board...")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Please wait"));
    frame.render_widget(message, popup);
}

/// A rect covering `percent_x`/`percent_y` of `area`, centered inside it.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
