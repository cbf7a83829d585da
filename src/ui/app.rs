use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::config::{AnimationConfig, AppConfig};
use crate::error::SolveError;
use crate::puzzle::{self, Board, Disk};

use super::board_widget::ROD_LABELS;
use super::game_view;

/// Rod roles for the one solve the app runs.
const SOURCE_ROD: usize = 0;
const AUXILIARY_ROD: usize = 1;
const TARGET_ROD: usize = 2;

/// How long to block waiting for input on each idle iteration, keeping the
/// terminal responsive to a quit request.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Where the animation currently is, shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Solving,
    Solved,
}

pub struct App {
    board: Board,
    animation: AnimationConfig,
    phase: Phase,
    moves_made: u64,
    total_moves: u64,
    message: String,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let disks = config.puzzle.disks;
        App {
            board: Board::new(disks),
            animation: config.animation.clone(),
            phase: Phase::Ready,
            moves_made: 0,
            total_moves: puzzle::move_count(disks),
            message: String::new(),
            should_quit: false,
        }
    }

    /// Main application loop: show the initial board, run the animated solve
    /// once to completion, then hold the final state on screen until the
    /// user quits.
    ///
    /// The solve phase paces itself with blocking sleeps and does not read
    /// input, so the terminal only reacts to keys once the tower has fully
    /// moved. The idle phase polls with a bounded timeout each iteration.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), SolveError> {
        self.present(terminal)?;
        thread::sleep(self.animation.start_hold());

        self.animate_solve(terminal)?;
        self.present(terminal)?;
        thread::sleep(self.animation.solved_hold());

        while !self.should_quit {
            self.draw(terminal)?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Run the solver once, presenting a frame after every move.
    fn animate_solve<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), SolveError> {
        self.phase = Phase::Solving;
        let disks = self.board.disk_count();

        let mut renderer = AnimatedRenderer {
            terminal,
            animation: &self.animation,
            moves_made: 0,
            total_moves: self.total_moves,
        };
        puzzle::solve(
            disks,
            SOURCE_ROD,
            TARGET_ROD,
            AUXILIARY_ROD,
            &mut self.board,
            &mut renderer,
        )?;
        self.moves_made = renderer.moves_made;

        debug_assert!(self.board.is_solved(TARGET_ROD));
        self.phase = Phase::Solved;
        self.message = format!("Solved in {} moves", self.moves_made);
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<(), SolveError> {
        let (phase, made, total) = (self.phase, self.moves_made, self.total_moves);
        terminal.draw(|f| game_view::render(f, &self.board, phase, made, total, &self.message))?;
        Ok(())
    }

    /// Draw one frame, then apply the frame-pacing delay.
    fn present<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<(), SolveError> {
        self.draw(terminal)?;
        thread::sleep(self.animation.frame_delay());
        Ok(())
    }

    fn handle_events(&mut self) -> Result<(), SolveError> {
        if event::poll(IDLE_POLL)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

/// Presents a frame and paces the animation after every solver move.
struct AnimatedRenderer<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    animation: &'a AnimationConfig,
    moves_made: u64,
    total_moves: u64,
}

impl<B: Backend> puzzle::MoveObserver for AnimatedRenderer<'_, B> {
    fn disk_moved(
        &mut self,
        disk: Disk,
        from: usize,
        to: usize,
        board: &Board,
    ) -> Result<(), SolveError> {
        self.moves_made += 1;
        let (made, total) = (self.moves_made, self.total_moves);
        let message = format!(
            "Moved disk {} from rod {} to rod {}",
            disk, ROD_LABELS[from], ROD_LABELS[to]
        );

        self.terminal.draw(|f| {
            game_view::render(f, board, Phase::Solving, made, total, &message)
        })?;
        thread::sleep(self.animation.frame_delay());
        thread::sleep(self.animation.move_delay());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn instant_config(disks: u32) -> AppConfig {
        let mut config = AppConfig::default();
        config.puzzle.disks = disks;
        config.animation.move_delay_ms = 0;
        config.animation.frame_delay_ms = 0;
        config.animation.start_hold_ms = 0;
        config.animation.solved_hold_ms = 0;
        config
    }

    #[test]
    fn test_new_app_starts_ready() {
        let app = App::new(&AppConfig::default());
        assert_eq!(app.phase, Phase::Ready);
        assert_eq!(app.moves_made, 0);
        assert_eq!(app.total_moves, 7);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&AppConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);

        let mut app = App::new(&AppConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_animated_solve_completes_board() {
        let mut app = App::new(&instant_config(3));
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        app.animate_solve(&mut terminal).unwrap();

        assert_eq!(app.phase, Phase::Solved);
        assert_eq!(app.moves_made, 7);
        assert!(app.board.is_solved(TARGET_ROD));
        assert_eq!(app.message, "Solved in 7 moves");
    }
}
