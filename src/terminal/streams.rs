use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use anyhow::{Context, Result};
use log::{debug, warn};
use termios::{tcsetattr, Termios, ECHO, ICANON, TCSANOW};

// xterm mouse reporting (press and release) and cursor visibility
const ENABLE_MOUSE: &str = "\x1b[?1000h\x1b[?25l";
const DISABLE_MOUSE: &str = "\x1b[?1000l\x1b[?25h";

/// Terminal settings for the game, restored when dropped
pub struct Streams {
    old_termios: Termios,
    restored: bool,
}

impl Streams {
    /// Switch stdin to unbuffered, silent input and turn on mouse reporting
    pub fn setup() -> Result<Self> {
        Self::setup_with(&mut io::stdout())
    }

    fn setup_with(out: &mut impl Write) -> Result<Self> {
        // 0 is file descriptor for stdin
        let old_termios = Termios::from_fd(0).context("stdin is not a terminal")?;
        // from here on an early return drops the value and restores the terminal
        let streams = Streams {
            old_termios,
            restored: false,
        };
        let mut new_termios = old_termios;
        new_termios.c_lflag &= !(ICANON | ECHO);
        tcsetattr(0, TCSANOW, &new_termios).context("failed to set terminal attributes")?;

        out.write_all(ENABLE_MOUSE.as_bytes())?;
        out.flush()?;
        debug!("terminal switched to game mode");
        Ok(streams)
    }

    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        tcsetattr(0, TCSANOW, &self.old_termios).context("failed to restore terminal attributes")?;
        let mut stdout = io::stdout();
        stdout.write_all(DISABLE_MOUSE.as_bytes())?;
        stdout.flush()?;
        debug!("terminal restored");
        Ok(())
    }

    /// Forward stdin one byte at a time over a channel.
    /// The channel disconnects when stdin closes.
    pub fn spawn_stdin_channel() -> Receiver<u8> {
        let (tx, rx) = mpsc::channel::<u8>();
        thread::spawn(move || {
            let mut reader = io::stdin();
            let mut buffer = [0u8; 1];
            loop {
                if let Err(err) = reader.read_exact(&mut buffer) {
                    debug!("stdin reader stopped: {err}");
                    break;
                }
                if tx.send(buffer[0]).is_err() {
                    break;
                }
            }
        });
        rx
    }
}

impl Drop for Streams {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("failed to restore terminal: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let before = match Termios::from_fd(0) {
            Ok(termios) => termios,
            // stdin is not a terminal under this runner, nothing to restore
            Err(_) => return,
        };
        assert!(Streams::setup_with(&mut BrokenPipe).is_err());
        let after = Termios::from_fd(0).unwrap();
        assert_eq!(after.c_lflag & (ICANON | ECHO), before.c_lflag & (ICANON | ECHO));
    }
}
