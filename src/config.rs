use std::path::PathBuf;
use std::time::Duration;

/// Game ticks per second
pub const TICK_RATE_HZ: u64 = 10;

/// Number of blocks across the width of the drawing surface
pub const BLOCKS_WIDE: i32 = 40;

/// Maximum number of segments a snake can hold, eating past it wins the game
pub const BODY_CAPACITY: usize = 200;

/// First body index that can kill the head, the ones before trail it during a turn
pub const SELF_COLLISION_GRACE: usize = 5;

/// Sound cue played when the target is eaten
pub const EAT_SOUND_FILE: &str = "get_mouse_sound.ogg";

/// Sound cue played on death
pub const DEATH_SOUND_FILE: &str = "death_sound.ogg";

/// Time between two ticks
pub fn tick_period() -> Duration {
    Duration::from_millis(1000 / TICK_RATE_HZ)
}

/// Configuration of a play session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Width of the drawing surface in pixels (terminal cells for the terminal front end)
    pub screen_width: i32,
    /// Height of the drawing surface
    pub screen_height: i32,
    /// Number of blocks across the width
    pub blocks_wide: i32,
    /// Directory holding the sound assets
    pub assets_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 80,
            screen_height: 48,
            blocks_wide: BLOCKS_WIDE,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl GameConfig {
    /// Create a configuration for a surface of the given size
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Default::default()
        }
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }
}
