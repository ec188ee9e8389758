use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::{CELL_WIDTH, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_SNAKE_BODY};
use crate::engine::{CellChange, GameEngine, GameStatus};
use crate::grid::{Cell, GridSize, Position};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Renderer-side copy of the board, updated from engine cell changes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardView {
    size: GridSize,
    cells: Vec<Cell>,
}

impl BoardView {
    /// Creates a blank view for a grid of `size`.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.total_cells()],
        }
    }

    /// Rebuilds the whole view from the engine's grid.
    pub fn sync(&mut self, engine: &GameEngine) {
        let grid = engine.grid();
        let size = grid.size();
        self.size = size;
        self.cells = (0..i32::from(size.rows))
            .flat_map(|row| (0..i32::from(size.columns)).map(move |column| Position { row, column }))
            .map(|position| grid.get(position).unwrap_or_default())
            .collect();
    }

    /// Applies the cells changed by the latest engine operation.
    pub fn apply(&mut self, changes: &[CellChange]) {
        for change in changes {
            if let Some(index) = self.index_of(change.position) {
                self.cells[index] = change.cell;
            }
        }
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index_of(position).map(|index| self.cells[index])
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.size) {
            return None;
        }
        let row = usize::try_from(position.row).ok()?;
        let column = usize::try_from(position.column).ok()?;
        Some(row * usize::from(self.size.columns) + column)
    }
}

/// Renders the full game frame.
pub fn render(frame: &mut Frame<'_>, view: &BoardView, engine: &GameEngine, paused: bool) {
    let area = frame.area();
    let size = view.size();
    let board_width = size.columns.saturating_mul(CELL_WIDTH).saturating_add(2);
    let board_height = size.rows.saturating_add(2);

    if area.width < board_width || area.height < board_height.saturating_add(1) {
        render_too_small(frame, area, board_width, board_height.saturating_add(1));
        return;
    }

    let [board_row, hud_row] = Layout::vertical([
        Constraint::Length(board_height),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);
    let [board_area] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(board_row);
    let [hud_area] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(hud_row);

    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, view);
    render_hud(frame, hud_area, engine, paused);

    match engine.status() {
        GameStatus::Over => render_game_over_menu(frame, board_area, engine),
        GameStatus::Running if paused => render_pause_menu(frame, board_area),
        GameStatus::Running => {}
    }
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, view: &BoardView) {
    let size = view.size();
    let buffer = frame.buffer_mut();

    for row in 0..size.rows {
        for column in 0..size.columns {
            let position = Position {
                row: i32::from(row),
                column: i32::from(column),
            };
            let (glyph, style) = match view.cell(position) {
                Some(Cell::SnakeBody) => (GLYPH_SNAKE_BODY, Style::new().fg(Color::Green)),
                Some(Cell::Food) => (
                    GLYPH_FOOD,
                    Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Some(Cell::Empty) | None => (GLYPH_EMPTY, Style::new()),
            };

            let x = inner.x.saturating_add(column.saturating_mul(CELL_WIDTH));
            let y = inner.y.saturating_add(row);
            if x < inner.right() && y < inner.bottom() {
                buffer.set_string(x, y, glyph, style);
            }
        }
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16) {
    let message = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {width}x{height}, have {}x{}", area.width, area.height)),
    ];
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::new().fg(Color::Yellow)),
        area,
    );
}
