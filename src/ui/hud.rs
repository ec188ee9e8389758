use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::engine::{GameEngine, GameStatus};

/// Renders the one-line status bar below the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, engine: &GameEngine, paused: bool) {
    frame.render_widget(
        Paragraph::new(status_line(engine, paused))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn status_line(engine: &GameEngine, paused: bool) -> Line<'static> {
    let state = match engine.status() {
        GameStatus::Over => "over",
        GameStatus::Running if paused => "paused",
        GameStatus::Running => "running",
    };

    Line::from(vec![
        Span::raw("Length "),
        Span::styled(
            engine.snake().len().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::raw("  Ticks "),
        Span::styled(
            engine.tick_count().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::raw(state),
    ])
}

#[cfg(test)]
mod tests {
    use crate::engine::GameEngine;
    use crate::grid::{GridSize, Position};
    use crate::input::Direction;

    use super::status_line;

    #[test]
    fn status_line_reports_length_ticks_and_state() {
        let mut engine = GameEngine::with_layout(
            GridSize {
                rows: 3,
                columns: 3,
            },
            vec![Position::new(1, 0), Position::new(1, 1)],
            Direction::Right,
            Position::new(0, 0),
            0,
        )
        .expect("layout should be valid");
        engine.tick();

        let text = status_line(&engine, true).to_string();

        assert_eq!(text, "Length 2  Ticks 1  paused");
    }
}
