// mouse reports arrive as 6 bytes: ESC [ M Cb Cx Cy
// where Cb is 32 + button code (3 means released) and Cx, Cy are 33 + the 0-based cell
use circular_buffer::CircularBuffer;

type InputBuffer = CircularBuffer<1024, u8>; // 1024 bytes in input buffer

const ESC: u8 = 27;
const CSI: u8 = b'[';
const MOUSE: u8 = b'M';
const REPORT_LEN: usize = 6;
const RELEASE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TerminalEvent {
    /// Pointer released at a cell of the terminal
    Release { x: f32, y: f32 },
    /// Any other byte
    Key(u8),
}

#[derive(Debug, Clone)]
pub struct PointerDecoder {
    input_buffer: InputBuffer,
}

impl PointerDecoder {
    pub fn new() -> Self {
        PointerDecoder {
            input_buffer: InputBuffer::new(),
        }
    }

    pub fn push(&mut self, byte: u8) {
        // if the buffer is full, ignore the input
        if self.input_buffer.is_full() {
            return;
        }
        self.input_buffer.push_back(byte);
    }

    fn byte(&self, index: usize) -> u8 {
        self.input_buffer.nth_front(index).copied().unwrap_or(0)
    }

    fn discard(&mut self, count: usize) {
        for _ in 0..count {
            self.input_buffer.pop_front();
        }
    }

    /// Next complete event, `None` when more bytes are needed
    pub fn next_event(&mut self) -> Option<TerminalEvent> {
        loop {
            let first = *self.input_buffer.front()?;
            if first != ESC {
                self.discard(1);
                return Some(TerminalEvent::Key(first));
            }
            if self.input_buffer.len() < 2 {
                return None;
            }
            if self.byte(1) != CSI {
                // lone escape
                self.discard(1);
                continue;
            }
            if self.input_buffer.len() < 3 {
                return None;
            }
            if self.byte(2) != MOUSE {
                // some other escape sequence (arrows and such), not used
                self.discard(3);
                continue;
            }
            if self.input_buffer.len() < REPORT_LEN {
                return None;
            }
            let button = self.byte(3).saturating_sub(32);
            let x = self.byte(4).saturating_sub(33);
            let y = self.byte(5).saturating_sub(33);
            self.discard(REPORT_LEN);
            if button & 3 == RELEASE {
                return Some(TerminalEvent::Release {
                    x: f32::from(x),
                    y: f32::from(y),
                });
            }
        }
    }
}

impl Default for PointerDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(decoder: &mut PointerDecoder, bytes: &[u8]) {
        for b in bytes {
            decoder.push(*b);
        }
    }

    #[test]
    fn test_release_is_decoded() {
        let mut decoder = PointerDecoder::new();
        // press then release of the left button at column 10, row 4 (0-based)
        feed(&mut decoder, &[ESC, CSI, MOUSE, 32, 43, 37]);
        feed(&mut decoder, &[ESC, CSI, MOUSE, 35, 43, 37]);
        assert_eq!(
            decoder.next_event(),
            Some(TerminalEvent::Release { x: 10.0, y: 4.0 })
        );
        assert_eq!(decoder.next_event(), None);
    }

    #[test]
    fn test_partial_report_waits() {
        let mut decoder = PointerDecoder::new();
        feed(&mut decoder, &[ESC, CSI, MOUSE, 35]);
        assert_eq!(decoder.next_event(), None);
        feed(&mut decoder, &[33, 33]);
        assert_eq!(
            decoder.next_event(),
            Some(TerminalEvent::Release { x: 0.0, y: 0.0 })
        );
    }

    #[test]
    fn test_escape_then_key() {
        let mut decoder = PointerDecoder::new();
        feed(&mut decoder, &[ESC]);
        assert_eq!(decoder.next_event(), None);
        feed(&mut decoder, &[b'q']);
        assert_eq!(decoder.next_event(), Some(TerminalEvent::Key(b'q')));
        assert_eq!(decoder.next_event(), None);
    }

    #[test]
    fn test_keys_and_arrows() {
        let mut decoder = PointerDecoder::new();
        feed(&mut decoder, &[ESC, CSI, b'A', b'q']);
        assert_eq!(decoder.next_event(), Some(TerminalEvent::Key(b'q')));
        assert_eq!(decoder.next_event(), None);
    }
}
