//! Fixed-rate loop running the update engine on its own thread.
//!
//! The loop thread takes ownership of the [`Game`] while it runs and hands it
//! back when joined, so the session is only ever touched from one thread. The
//! `playing` flag and the pending direction are the only shared state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, error, trace};

use crate::config::tick_period;
use crate::engine::Session;
use crate::input::{DirectionCell, InputMapper};
use crate::platform::{AudioCue, Navigator, Renderer};

// upper bound on a single wait, keeps pause responsive
const POLL_INTERVAL: Duration = Duration::from_millis(3);

/// A session together with the collaborators it reports to
pub struct Game {
    session: Session,
    renderer: Box<dyn Renderer + Send>,
    audio: Box<dyn AudioCue + Send>,
    navigator: Box<dyn Navigator + Send>,
}

impl Game {
    pub fn new(
        session: Session,
        renderer: Box<dyn Renderer + Send>,
        audio: Box<dyn AudioCue + Send>,
        navigator: Box<dyn Navigator + Send>,
    ) -> Self {
        Game {
            session,
            renderer,
            audio,
            navigator,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn run(mut self, playing: Arc<AtomicBool>, direction: Arc<DirectionCell>) -> Self {
        let period = tick_period();
        // fresh deadline: the first tick happens right away
        let mut next_tick = Instant::now();
        while playing.load(Ordering::Acquire) {
            let now = Instant::now();
            if now < next_tick {
                thread::sleep((next_tick - now).min(POLL_INTERVAL));
                continue;
            }

            let status = self.session.tick(
                direction.load(),
                &mut *self.audio,
                &mut *self.navigator,
            );
            if !status.is_running() {
                // the session is over, no more ticks
                playing.store(false, Ordering::Release);
                break;
            }

            if self.renderer.surface_valid() {
                self.renderer.present(&self.session.frame());
            } else {
                trace!("drawing surface not ready, frame skipped");
            }
            next_tick = Instant::now() + period;
        }
        self
    }
}

enum LoopState {
    Stopped(Game),
    Running(JoinHandle<Game>),
    // the loop thread panicked and took the game with it
    Lost,
}

pub struct GameLoop {
    playing: Arc<AtomicBool>,
    direction: Arc<DirectionCell>,
    state: LoopState,
}

impl GameLoop {
    pub fn new(game: Game) -> Self {
        GameLoop {
            playing: Arc::new(AtomicBool::new(false)),
            direction: Arc::new(DirectionCell::default()),
            state: LoopState::Stopped(game),
        }
    }

    /// Mapper feeding pointer releases to this loop, sized for the given surface
    pub fn input_mapper(&self, screen_width: i32, screen_height: i32) -> InputMapper {
        InputMapper::new(screen_width, screen_height, Arc::clone(&self.direction))
    }

    pub fn direction(&self) -> Arc<DirectionCell> {
        Arc::clone(&self.direction)
    }

    /// Whether the loop is currently ticking
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    /// The session, available while the loop is stopped
    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            LoopState::Stopped(game) => Some(game.session()),
            _ => None,
        }
    }

    /// Start ticking on a new thread. Does nothing if already running
    /// or if the session is over.
    pub fn resume(&mut self) {
        let game = match std::mem::replace(&mut self.state, LoopState::Lost) {
            LoopState::Stopped(game) if game.session().status().is_running() => game,
            other => {
                self.state = other;
                return;
            }
        };

        self.playing.store(true, Ordering::Release);
        let playing = Arc::clone(&self.playing);
        let direction = Arc::clone(&self.direction);
        let handle = thread::spawn(move || game.run(playing, direction));
        self.state = LoopState::Running(handle);
        debug!("game loop resumed");
    }

    /// Stop ticking and wait for the loop thread to exit. Safe to call repeatedly.
    pub fn pause(&mut self) {
        self.playing.store(false, Ordering::Release);
        let handle = match std::mem::replace(&mut self.state, LoopState::Lost) {
            LoopState::Running(handle) => handle,
            other => {
                self.state = other;
                return;
            }
        };

        match handle.join() {
            Ok(game) => {
                self.state = LoopState::Stopped(game);
                debug!("game loop paused");
            }
            Err(_) => {
                error!("game loop thread panicked, session dropped");
            }
        }
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.pause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::platform::{Frame, Silent};
    use crate::snake::{Direction, Position, SnakeBody};
    use crate::target::TargetSpawner;
    use std::sync::atomic::AtomicUsize;

    struct CountingRenderer(Arc<AtomicUsize>);

    impl Renderer for CountingRenderer {
        fn present(&mut self, _frame: &Frame<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn looping_game(frames: Arc<AtomicUsize>) -> Game {
        let board = Board::new(40, 24, 1).unwrap();
        let body = SnakeBody::new(Position::new(2, 2));
        // far from any wall for a few ticks
        let session = Session::from_parts(board, body, Position::new(30, 20), TargetSpawner::seeded(1));
        Game::new(
            session,
            Box::new(CountingRenderer(frames)),
            Box::new(Silent),
            Box::new(Silent),
        )
    }

    #[test]
    fn test_pause_twice_and_resume() {
        let frames = Arc::new(AtomicUsize::new(0));
        let mut game_loop = GameLoop::new(looping_game(Arc::clone(&frames)));
        game_loop.resume();
        assert!(game_loop.is_playing());
        thread::sleep(Duration::from_millis(50));
        game_loop.pause();
        game_loop.pause();
        assert!(!game_loop.is_playing());
        let after_first = frames.load(Ordering::SeqCst);
        assert!(after_first >= 1);

        // the fresh deadline ticks straight away
        game_loop.resume();
        thread::sleep(Duration::from_millis(50));
        game_loop.pause();
        assert!(frames.load(Ordering::SeqCst) > after_first);
    }

    #[test]
    fn test_direction_reaches_the_loop() {
        let frames = Arc::new(AtomicUsize::new(0));
        let mut game_loop = GameLoop::new(looping_game(frames));
        game_loop.direction().store(Direction::Up);
        game_loop.resume();
        thread::sleep(Duration::from_millis(50));
        game_loop.pause();
        let head = game_loop.session().unwrap().body().head();
        assert_eq!(head.x, 2);
        assert!(head.y > 2);
    }
}
