// a touch can only switch the snake to the other axis:
// moving horizontally, the touched half of the screen picks up or down,
// moving vertically, it picks left or right
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::snake::Direction;

/// Single-slot direction shared between the input side and the loop thread.
/// The latest store wins, the loop loads it once per tick.
#[derive(Debug)]
pub struct DirectionCell(AtomicU8);

impl DirectionCell {
    pub fn new(direction: Direction) -> Self {
        DirectionCell(AtomicU8::new(Self::encode(direction)))
    }

    pub fn load(&self) -> Direction {
        Self::decode(self.0.load(Ordering::Acquire))
    }

    pub fn store(&self, direction: Direction) {
        self.0.store(Self::encode(direction), Ordering::Release);
    }

    fn encode(direction: Direction) -> u8 {
        match direction {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    fn decode(value: u8) -> Direction {
        match value {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }
}

impl Default for DirectionCell {
    fn default() -> Self {
        DirectionCell::new(Direction::Right)
    }
}

/// Direction picked by a pointer release at `(x, y)` while moving in `current`.
/// The midlines are whole pixels, `size / 2` rounded down.
pub fn direction_for_release(
    current: Direction,
    x: f32,
    y: f32,
    screen_width: i32,
    screen_height: i32,
) -> Direction {
    if current.is_horizontal() {
        if y >= (screen_height / 2) as f32 {
            Direction::Up
        } else {
            Direction::Down
        }
    } else if x >= (screen_width / 2) as f32 {
        Direction::Right
    } else {
        Direction::Left
    }
}

/// Turns pointer releases into the pending direction of a running loop
#[derive(Debug, Clone)]
pub struct InputMapper {
    screen_width: i32,
    screen_height: i32,
    direction: Arc<DirectionCell>,
}

impl InputMapper {
    pub fn new(screen_width: i32, screen_height: i32, direction: Arc<DirectionCell>) -> Self {
        InputMapper {
            screen_width,
            screen_height,
            direction,
        }
    }

    /// Handle a pointer release, returns the direction now pending
    pub fn on_release(&self, x: f32, y: f32) -> Direction {
        let current = self.direction.load();
        let next = direction_for_release(current, x, y, self.screen_width, self.screen_height);
        self.direction.store(next);
        next
    }

    pub fn direction(&self) -> Direction {
        self.direction.load()
    }
}
