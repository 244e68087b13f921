// the snake moves head first: every segment takes the place of the one in front of it,
// then the head advances by one block; when growing the old tail is kept instead of dropped
use anyhow::{ensure, Result};
use circular_buffer::CircularBuffer;

use crate::config::{BODY_CAPACITY, SELF_COLLISION_GRACE};

type Segments = CircularBuffer<BODY_CAPACITY, Position>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    // Up grows y, the renderer draws row 0 at the top of the surface
    pub fn move_up(&mut self) {
        self.y += 1;
    }
    pub fn move_down(&mut self) {
        self.y -= 1;
    }
    pub fn move_left(&mut self) {
        self.x -= 1;
    }
    pub fn move_right(&mut self) {
        self.x += 1;
    }

    pub fn moved(&self, direction: Direction) -> Position {
        let mut res = *self;
        match direction {
            Direction::Up => res.move_up(),
            Direction::Down => res.move_down(),
            Direction::Left => res.move_left(),
            Direction::Right => res.move_right(),
        }
        res
    }
}

/// Body of the snake, the head is the first element
#[derive(Debug, Clone)]
pub struct SnakeBody {
    segments: Segments,
}

impl SnakeBody {
    /// Index of the head in the segment sequence
    pub const HEAD: usize = 0;

    /// A snake made of just a head
    pub fn new(head: Position) -> Self {
        let mut segments = Segments::new();
        segments.push_back(head);
        SnakeBody { segments }
    }

    /// Build a body from explicit segments, head first
    pub fn from_segments(positions: &[Position]) -> Result<Self> {
        ensure!(!positions.is_empty(), "a snake needs at least a head");
        ensure!(
            positions.len() <= BODY_CAPACITY,
            "a snake holds at most {BODY_CAPACITY} segments, got {}",
            positions.len()
        );
        let mut segments = Segments::new();
        for position in positions {
            segments.push_back(*position);
        }
        Ok(SnakeBody { segments })
    }

    pub fn head(&self) -> Position {
        // never empty: built with a head and advance keeps the length
        self.segments
            .front()
            .copied()
            .unwrap_or(Position::new(0, 0))
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// No room left to grow
    pub fn is_full(&self) -> bool {
        self.segments.is_full()
    }

    pub fn segment(&self, index: usize) -> Option<Position> {
        self.segments.nth_front(index).copied()
    }

    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Shift every segment into the place of the one ahead and move the head.
    /// With `grow` the old tail stays, so the length increases by one.
    /// Growing a full body is the caller's responsibility to prevent.
    pub fn advance(&mut self, direction: Direction, grow: bool) {
        let new_head = self.head().moved(direction);
        if !grow {
            self.segments.pop_back();
        }
        self.segments.push_front(new_head);
    }

    /// Whether the head sits on a segment far enough behind it to count as a bite
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.segments
            .iter()
            .skip(SELF_COLLISION_GRACE)
            .any(|segment| *segment == head)
    }
}
