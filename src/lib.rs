//! Touch Snake - grid snake driven by a fixed-rate loop
//!
//! The core (board, snake, target, engine, input, scheduler) is purely grid based
//! and talks to the outside world through the traits in [`platform`].
//! The [`terminal`] module is one such outside world.

pub mod board;
pub mod config;
pub mod engine;
pub mod input;
pub mod platform;
pub mod scheduler;
pub mod snake;
pub mod target;
pub mod terminal;

pub use board::Board;
pub use config::GameConfig;
pub use engine::{Session, Status};
pub use input::{DirectionCell, InputMapper};
pub use platform::{AudioCue, Frame, Navigator, Outcome, Renderer, SessionSummary, Silent};
pub use scheduler::{Game, GameLoop};
pub use snake::{Direction, Position, SnakeBody};
pub use target::TargetSpawner;
