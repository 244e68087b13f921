use std::io::{self, Write};

use colored::Colorize;
use log::warn;
use termios::Termios;

use crate::board::Board;
use crate::platform::{Frame, Renderer};
use crate::snake::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Body,
    Head,
    Target,
    Text(char),
}

fn clear_screen() -> String {
    format!("{}[2J{}[1;1H", 27 as char, 27 as char)
}

/// Draws frames on stdout, one terminal cell per surface pixel
pub struct TerminalRenderer {
    board: Board,
    width: usize,
    height: usize,
}

impl TerminalRenderer {
    pub fn new(board: Board, screen_width: i32, screen_height: i32) -> Self {
        TerminalRenderer {
            board,
            width: screen_width.max(0) as usize,
            height: screen_height.max(0) as usize,
        }
    }

    fn fill_block(&self, cells: &mut [Vec<Cell>], position: Position, cell: Cell) {
        let rect = self.board.block_rect(position);
        for row in rect.top.max(0)..rect.bottom {
            for col in rect.left.max(0)..rect.right {
                if let Some(slot) = cells
                    .get_mut(row as usize)
                    .and_then(|line| line.get_mut(col as usize))
                {
                    *slot = cell;
                }
            }
        }
    }

    fn compose(&self, frame: &Frame<'_>) -> Vec<Vec<Cell>> {
        let mut cells = vec![vec![Cell::Empty; self.width]; self.height];
        // body first so the head is drawn over any segment sharing its block
        for (index, segment) in frame.segments().enumerate() {
            if index != frame.head_index {
                self.fill_block(&mut cells, segment, Cell::Body);
            }
        }
        if let Some(head) = frame.body.segment(frame.head_index) {
            self.fill_block(&mut cells, head, Cell::Head);
        }
        self.fill_block(&mut cells, frame.target, Cell::Target);

        if let Some(first_row) = cells.first_mut() {
            let score = format!("Score:{}", frame.score);
            for (slot, ch) in first_row.iter_mut().zip(score.chars()) {
                *slot = Cell::Text(ch);
            }
        }
        cells
    }

    fn draw(&self, cells: &[Vec<Cell>]) -> String {
        let mut out = clear_screen();
        for (i, row) in cells.iter().enumerate() {
            for cell in row {
                let piece = match cell {
                    Cell::Empty => " ".on_truecolor(255, 102, 102),
                    Cell::Body => "█".truecolor(255, 255, 255),
                    Cell::Head => "█".truecolor(204, 0, 0),
                    Cell::Target => "█".truecolor(255, 255, 51),
                    Cell::Text(ch) => ch.to_string().as_str().white().on_truecolor(255, 102, 102),
                };
                out.push_str(&piece.to_string());
            }
            if i + 1 < cells.len() {
                out.push_str("\r\n");
            }
        }
        out
    }
}

impl Renderer for TerminalRenderer {
    fn surface_valid(&self) -> bool {
        // 1 is file descriptor for stdout
        Termios::from_fd(1).is_ok()
    }

    fn present(&mut self, frame: &Frame<'_>) {
        let screen = self.draw(&self.compose(frame));
        let mut stdout = io::stdout().lock();
        if let Err(err) = stdout
            .write_all(screen.as_bytes())
            .and_then(|_| stdout.flush())
        {
            warn!("failed to draw frame: {err}");
        }
    }
}
