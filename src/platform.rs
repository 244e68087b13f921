//! Boundary between the game core and whatever draws, plays sounds and navigates.
//!
//! The core only talks to these traits. The loop thread owns its collaborators,
//! hence the `Send` bounds on the boxed versions used by the scheduler.

use crate::snake::{Position, SnakeBody};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The head left the board
    Wall,
    /// The head ran into its own body
    SelfCollision,
    /// The body ran out of room to grow
    Victory,
}

/// What the navigator learns when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub outcome: Outcome,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub body: &'a SnakeBody,
    pub head_index: usize,
    pub target: Position,
    pub score: u32,
}

impl<'a> Frame<'a> {
    pub fn segments(&self) -> impl Iterator<Item = Position> + 'a {
        let body: &'a SnakeBody = self.body;
        body.segments()
    }
}

pub trait Renderer {
    /// Whether there is something to draw on right now
    fn surface_valid(&self) -> bool {
        true
    }

    fn present(&mut self, frame: &Frame<'_>);
}

/// Fire-and-forget sound notifications
pub trait AudioCue {
    fn play_eat_sound(&mut self);
    fn play_death_sound(&mut self);
}

pub trait Navigator {
    /// Leave the play session, called once when it ends
    fn return_to_menu(&mut self, summary: SessionSummary);
}

/// Collaborator that ignores every call
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Renderer for Silent {
    fn present(&mut self, _frame: &Frame<'_>) {}
}

impl AudioCue for Silent {
    fn play_eat_sound(&mut self) {}
    fn play_death_sound(&mut self) {}
}

impl Navigator for Silent {
    fn return_to_menu(&mut self, _summary: SessionSummary) {}
}
