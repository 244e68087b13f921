// the board is a grid of square blocks laid over the drawing surface,
// its width is fixed in blocks and its height follows from the surface aspect ratio
use anyhow::{ensure, Result};

use crate::config::GameConfig;
use crate::snake::Position;

/// Smallest board side that still leaves room for the target inside the border ring
pub const MIN_BLOCKS: i32 = 3;

/// Rectangle on the drawing surface, right and bottom are exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    block_size: i32,
}

impl Board {
    pub fn new(width: i32, height: i32, block_size: i32) -> Result<Self> {
        ensure!(
            width >= MIN_BLOCKS && height >= MIN_BLOCKS,
            "board must be at least {MIN_BLOCKS}x{MIN_BLOCKS} blocks, got {width}x{height}"
        );
        ensure!(block_size > 0, "block size must be positive, got {block_size}");
        Ok(Board {
            width,
            height,
            block_size,
        })
    }

    /// Derive the board from the surface size: the block size splits the width
    /// into `blocks_wide` blocks, the height is however many of them fit
    pub fn for_screen(screen_width: i32, screen_height: i32, blocks_wide: i32) -> Result<Self> {
        ensure!(blocks_wide > 0, "blocks_wide must be positive");
        let block_size = screen_width / blocks_wide;
        ensure!(
            block_size > 0,
            "screen width {screen_width} is too narrow for {blocks_wide} blocks"
        );
        Self::new(blocks_wide, screen_height / block_size, block_size)
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::for_screen(config.screen_width, config.screen_height, config.blocks_wide)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn block_size(&self) -> i32 {
        self.block_size
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Map a grid cell to the surface, the only place where blocks become pixels
    pub fn block_rect(&self, position: Position) -> PixelRect {
        let left = position.x * self.block_size;
        let top = position.y * self.block_size;
        PixelRect {
            left,
            top,
            right: left + self.block_size,
            bottom: top + self.block_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_follows_aspect_ratio() {
        let board = Board::for_screen(800, 480, 40).unwrap();
        assert_eq!(board.block_size(), 20);
        assert_eq!(board.width(), 40);
        assert_eq!(board.height(), 24);
    }

    #[test]
    fn test_too_small_surface_is_rejected() {
        assert!(Board::for_screen(20, 480, 40).is_err());
        assert!(Board::for_screen(800, 40, 40).is_err());
        assert!(Board::new(2, 10, 1).is_err());
    }

    #[test]
    fn test_contains() {
        let board = Board::new(10, 8, 1).unwrap();
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(9, 7)));
        assert!(!board.contains(Position::new(-1, 3)));
        assert!(!board.contains(Position::new(10, 3)));
        assert!(!board.contains(Position::new(3, -1)));
        assert!(!board.contains(Position::new(3, 8)));
    }

    #[test]
    fn test_block_rect() {
        let board = Board::new(40, 24, 20).unwrap();
        let rect = board.block_rect(Position::new(3, 2));
        assert_eq!(
            rect,
            PixelRect {
                left: 60,
                top: 40,
                right: 80,
                bottom: 60
            }
        );
    }
}
