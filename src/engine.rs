// one tick: eat the target if the head is on it, move, then look for a death.
// eating comes first so that growth and movement agree within the same tick
use anyhow::Result;
use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::platform::{AudioCue, Frame, Navigator, Outcome, SessionSummary};
use crate::snake::{Direction, Position, SnakeBody};
use crate::target::TargetSpawner;

/// State of a session after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Over(Outcome),
}

impl Status {
    pub fn is_running(&self) -> bool {
        matches!(self, Status::Running)
    }
}

/// One play-through, from start to death
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    body: SnakeBody,
    target: Position,
    score: u32,
    status: Status,
    spawner: TargetSpawner,
}

impl Session {
    /// Start with just a head in the middle of the board and a target to eat
    pub fn new(board: Board, mut spawner: TargetSpawner) -> Self {
        let target = spawner.spawn(&board);
        info!(
            "new session on a {}x{} board (block {}px)",
            board.width(),
            board.height(),
            board.block_size()
        );
        Session {
            body: SnakeBody::new(board.center()),
            board,
            target,
            score: 0,
            status: Status::Running,
            spawner,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Ok(Self::new(Board::from_config(config)?, TargetSpawner::new()))
    }

    /// Session starting from an explicit snake and target, score starts at zero
    pub fn from_parts(board: Board, body: SnakeBody, target: Position, spawner: TargetSpawner) -> Self {
        Session {
            board,
            body,
            target,
            score: 0,
            status: Status::Running,
            spawner,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            body: &self.body,
            head_index: SnakeBody::HEAD,
            target: self.target,
            score: self.score,
        }
    }

    /// Advance the session by one tick in `direction`.
    /// A session that is over stays over and ignores further ticks.
    pub fn tick(
        &mut self,
        direction: Direction,
        audio: &mut dyn AudioCue,
        navigator: &mut dyn Navigator,
    ) -> Status {
        if !self.status.is_running() {
            return self.status;
        }

        let mut grow = false;
        if self.body.head() == self.target {
            if self.body.is_full() {
                // no room left to grow, eating this one wins the game
                self.score += 1;
                audio.play_eat_sound();
                info!("snake filled its body, victory with score {}", self.score);
                return self.finish(Outcome::Victory, navigator);
            }
            grow = true;
            self.eat(audio);
        }

        self.body.advance(direction, grow);

        if let Some(outcome) = self.detect_death() {
            audio.play_death_sound();
            info!("snake died ({outcome:?}) with score {}", self.score);
            return self.finish(outcome, navigator);
        }
        self.status
    }

    fn eat(&mut self, audio: &mut dyn AudioCue) {
        self.target = self.spawner.spawn(&self.board);
        self.score += 1;
        audio.play_eat_sound();
        debug!("target eaten, score {}, next target at {:?}", self.score, self.target);
    }

    fn detect_death(&self) -> Option<Outcome> {
        if !self.board.contains(self.body.head()) {
            return Some(Outcome::Wall);
        }
        if self.body.bites_itself() {
            return Some(Outcome::SelfCollision);
        }
        None
    }

    fn finish(&mut self, outcome: Outcome, navigator: &mut dyn Navigator) -> Status {
        self.status = Status::Over(outcome);
        navigator.return_to_menu(SessionSummary {
            score: self.score,
            outcome,
        });
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Silent;

    #[derive(Default)]
    struct Counters {
        eats: u32,
        deaths: u32,
        summaries: Vec<SessionSummary>,
    }

    impl AudioCue for Counters {
        fn play_eat_sound(&mut self) {
            self.eats += 1;
        }
        fn play_death_sound(&mut self) {
            self.deaths += 1;
        }
    }

    impl Navigator for Counters {
        fn return_to_menu(&mut self, summary: SessionSummary) {
            self.summaries.push(summary);
        }
    }

    fn session(segments: &[Position], target: Position) -> Session {
        let board = Board::new(10, 10, 1).unwrap();
        let body = SnakeBody::from_segments(segments).unwrap();
        Session::from_parts(board, body, target, TargetSpawner::seeded(3))
    }

    fn tick(session: &mut Session, direction: Direction, counters: &mut Counters) -> Status {
        let mut nav = Counters::default();
        let status = session.tick(direction, counters, &mut nav);
        counters.summaries.extend(nav.summaries);
        status
    }

    #[test]
    fn test_new_session() {
        let board = Board::new(40, 24, 1).unwrap();
        let session = Session::new(board, TargetSpawner::seeded(1));
        assert_eq!(session.body().len(), 1);
        assert_eq!(session.body().head(), Position::new(20, 12));
        assert_eq!(session.score(), 0);
        assert!(session.status().is_running());
    }

    #[test]
    fn test_from_config_uses_the_surface() {
        let session = Session::from_config(&GameConfig::new(800, 480)).unwrap();
        assert_eq!(session.board().width(), 40);
        assert_eq!(session.board().height(), 24);
        assert_eq!(session.body().head(), Position::new(20, 12));
        assert!(Session::from_config(&GameConfig::new(20, 480)).is_err());
    }

    #[test]
    fn test_plain_move() {
        let mut s = session(&[Position::new(5, 5), Position::new(4, 5)], Position::new(1, 1));
        let mut c = Counters::default();
        assert_eq!(tick(&mut s, Direction::Right, &mut c), Status::Running);
        assert_eq!(s.body().head(), Position::new(6, 5));
        assert_eq!(s.body().segment(1), Some(Position::new(5, 5)));
        assert_eq!(s.body().len(), 2);
        assert_eq!(s.score(), 0);
        assert_eq!(c.eats, 0);
    }

    #[test]
    fn test_eat_grows_and_respawns() {
        let mut s = session(&[Position::new(5, 5), Position::new(4, 5)], Position::new(5, 5));
        let mut c = Counters::default();
        tick(&mut s, Direction::Right, &mut c);
        assert_eq!(s.body().len(), 3);
        assert_eq!(s.score(), 1);
        assert_eq!(c.eats, 1);
        assert_eq!(s.body().segment(2), Some(Position::new(4, 5)));
        let t = s.target();
        assert!(t.x >= 1 && t.x < 9 && t.y >= 1 && t.y < 9);
    }

    #[test]
    fn test_wall_death() {
        let mut s = session(&[Position::new(9, 5)], Position::new(1, 1));
        let mut c = Counters::default();
        let status = tick(&mut s, Direction::Right, &mut c);
        assert_eq!(status, Status::Over(Outcome::Wall));
        assert_eq!(c.deaths, 1);
        assert_eq!(
            c.summaries,
            vec![SessionSummary {
                score: 0,
                outcome: Outcome::Wall
            }]
        );
    }

    #[test]
    fn test_over_session_ignores_ticks() {
        let mut s = session(&[Position::new(0, 5)], Position::new(1, 1));
        let mut c = Counters::default();
        tick(&mut s, Direction::Left, &mut c);
        let head = s.body().head();
        tick(&mut s, Direction::Left, &mut c);
        assert_eq!(s.body().head(), head);
        assert_eq!(c.deaths, 1);
        assert_eq!(c.summaries.len(), 1);
    }

    #[test]
    fn test_victory_when_full() {
        let positions: Vec<Position> = (0..crate::config::BODY_CAPACITY)
            .map(|_| Position::new(5, 5))
            .collect();
        let board = Board::new(10, 10, 1).unwrap();
        let body = SnakeBody::from_segments(&positions).unwrap();
        let mut s = Session::from_parts(board, body, Position::new(5, 5), TargetSpawner::seeded(3));
        let mut nav = Counters::default();
        let status = s.tick(Direction::Up, &mut Silent, &mut nav);
        assert_eq!(status, Status::Over(Outcome::Victory));
        assert_eq!(s.score(), 1);
        assert_eq!(s.body().len(), crate::config::BODY_CAPACITY);
        assert_eq!(nav.summaries.len(), 1);
    }
}
