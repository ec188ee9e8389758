use crate::engine::{GameEngine, GameStatus, TickOutcome};
use crate::error::LayoutError;
use crate::grid::GridSize;
use crate::input::GameInput;
use crate::renderer::BoardView;

/// What the clock driver should do after an input was handled.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Restarted,
    Quit,
}

/// One play session: the current engine, its board view, and pause state.
///
/// A new game replaces the engine with a fresh instance. With a base seed,
/// game `n` of the session uses `seed + n` so replays stay reproducible.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    view: BoardView,
    size: GridSize,
    seed: Option<u64>,
    games_started: u64,
    paused: bool,
}

impl Session {
    pub fn new(size: GridSize, seed: Option<u64>) -> Result<Self, LayoutError> {
        let engine = build_engine(size, seed, 0)?;
        let mut view = BoardView::new(size);
        view.sync(&engine);

        Ok(Self {
            engine,
            view,
            size,
            seed,
            games_started: 1,
            paused: false,
        })
    }

    /// Applies one input event between ticks.
    pub fn handle_input(&mut self, input: GameInput) -> Result<Control, LayoutError> {
        match input {
            GameInput::Quit => return Ok(Control::Quit),
            GameInput::Direction(direction) if !self.paused => {
                self.engine.request_direction(direction);
            }
            GameInput::Direction(_) => {}
            GameInput::Pause => {
                if self.engine.status() == GameStatus::Running {
                    self.paused = !self.paused;
                }
            }
            GameInput::NewGame if self.engine.status() == GameStatus::Over => {
                self.restart()?;
                return Ok(Control::Restarted);
            }
            GameInput::NewGame => {}
        }

        Ok(Control::Continue)
    }

    /// Runs one scheduled tick; `None` while paused or after game over.
    pub fn advance(&mut self) -> Option<TickOutcome> {
        if self.paused || self.engine.status() == GameStatus::Over {
            return None;
        }

        let outcome = self.engine.tick();
        self.view.apply(self.engine.changes());

        if self.engine.status() == GameStatus::Over {
            log::info!(
                "game {} over: {:?}, length {}, {} ticks",
                self.games_started,
                self.engine.end_reason(),
                self.engine.snake().len(),
                self.engine.tick_count()
            );
        }

        Some(outcome)
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn restart(&mut self) -> Result<(), LayoutError> {
        self.engine = build_engine(self.size, self.seed, self.games_started)?;
        self.view.sync(&self.engine);
        self.games_started += 1;
        self.paused = false;
        Ok(())
    }
}

fn build_engine(size: GridSize, seed: Option<u64>, game_index: u64) -> Result<GameEngine, LayoutError> {
    match seed {
        Some(seed) => GameEngine::new_with_seed(size, seed.wrapping_add(game_index)),
        None => GameEngine::new(size),
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::GameStatus;
    use crate::grid::GridSize;
    use crate::input::{Direction, GameInput};

    use super::{Control, Session};

    const SIZE: GridSize = GridSize {
        rows: 6,
        columns: 6,
    };

    fn play_until_over(session: &mut Session) {
        for _ in 0..1_000 {
            if session.engine().status() == GameStatus::Over {
                return;
            }
            session.advance();
        }
        panic!("a snake without steering must leave a 6x6 grid");
    }

    #[test]
    fn pause_stops_ticks() {
        let mut session = Session::new(SIZE, Some(1)).expect("6x6 is playable");

        session
            .handle_input(GameInput::Pause)
            .expect("pause never fails");

        assert!(session.is_paused());
        assert_eq!(session.advance(), None);
        assert_eq!(session.engine().tick_count(), 0);
    }

    #[test]
    fn new_game_is_ignored_while_running() {
        let mut session = Session::new(SIZE, Some(2)).expect("6x6 is playable");
        session.advance();

        let control = session
            .handle_input(GameInput::NewGame)
            .expect("ignored input never fails");

        assert_eq!(control, Control::Continue);
        assert_eq!(session.engine().tick_count(), 1);
    }

    #[test]
    fn new_game_after_game_over_starts_fresh_engine() {
        let mut session = Session::new(SIZE, Some(3)).expect("6x6 is playable");
        play_until_over(&mut session);
        assert_eq!(session.advance(), None);

        let control = session
            .handle_input(GameInput::NewGame)
            .expect("restart should succeed");

        assert_eq!(control, Control::Restarted);
        assert_eq!(session.engine().status(), GameStatus::Running);
        assert_eq!(session.engine().tick_count(), 0);
        assert_eq!(session.engine().snake().len(), 1);
    }

    #[test]
    fn directions_are_ignored_while_paused() {
        let mut session = Session::new(SIZE, Some(4)).expect("6x6 is playable");
        let before = session.engine().pending_direction();
        let turn = match before {
            Direction::Left | Direction::Right => Direction::Up,
            Direction::Up | Direction::Down => Direction::Left,
        };

        session
            .handle_input(GameInput::Pause)
            .expect("pause never fails");
        session
            .handle_input(GameInput::Direction(turn))
            .expect("direction never fails");

        assert_eq!(session.engine().pending_direction(), before);
    }

    #[test]
    fn quit_is_reported() {
        let mut session = Session::new(SIZE, None).expect("6x6 is playable");

        assert_eq!(
            session.handle_input(GameInput::Quit).expect("quit never fails"),
            Control::Quit
        );
    }
}
