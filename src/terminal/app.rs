// the main thread shows the menu and feeds pointer input to the running session,
// the session itself ticks on the loop thread and reports its end through the navigator
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

use anyhow::{bail, Result};
use log::info;

use super::audio::TerminalAudio;
use super::menu::{self, ChannelNavigator};
use super::pointer::{PointerDecoder, TerminalEvent};
use super::render::TerminalRenderer;
use crate::config::GameConfig;
use crate::engine::Session;
use crate::platform::SessionSummary;
use crate::scheduler::{Game, GameLoop};

const INPUT_POLL: Duration = Duration::from_millis(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Play,
    Quit,
}

pub struct App {
    config: GameConfig,
    keys: Receiver<u8>,
    decoder: PointerDecoder,
}

impl App {
    pub fn new(config: GameConfig, keys: Receiver<u8>) -> Self {
        App {
            config,
            keys,
            decoder: PointerDecoder::new(),
        }
    }

    /// Menu, play, back to the menu, until the player quits
    pub fn run(&mut self) -> Result<()> {
        let mut last = None;
        loop {
            menu::show(last)?;
            match self.wait_for_choice()? {
                MenuChoice::Play => {
                    if let Some(summary) = self.play()? {
                        last = Some(summary);
                    }
                }
                MenuChoice::Quit => return Ok(()),
            }
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        match self.keys.recv_timeout(INPUT_POLL) {
            Ok(byte) => Ok(Some(byte)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => bail!("stdin closed"),
        }
    }

    fn wait_for_choice(&mut self) -> Result<MenuChoice> {
        loop {
            if let Some(byte) = self.next_byte()? {
                self.decoder.push(byte);
            }
            while let Some(event) = self.decoder.next_event() {
                match event {
                    TerminalEvent::Release { .. } => return Ok(MenuChoice::Play),
                    TerminalEvent::Key(b'p' | b'\n' | b'\r') => return Ok(MenuChoice::Play),
                    TerminalEvent::Key(b'q') => return Ok(MenuChoice::Quit),
                    TerminalEvent::Key(_) => {}
                }
            }
        }
    }

    /// Run one session. Returns its summary, or `None` if the player left early.
    fn play(&mut self) -> Result<Option<SessionSummary>> {
        let config = &self.config;
        let session = Session::from_config(config)?;
        let board = *session.board();
        let (tx, ended) = mpsc::channel();
        let game = Game::new(
            session,
            Box::new(TerminalRenderer::new(board, config.screen_width, config.screen_height)),
            Box::new(TerminalAudio::load(&config.assets_dir)),
            Box::new(ChannelNavigator::new(tx)),
        );
        let mut game_loop = GameLoop::new(game);
        let mapper = game_loop.input_mapper(config.screen_width, config.screen_height);
        game_loop.resume();

        loop {
            match ended.try_recv() {
                Ok(summary) => {
                    game_loop.pause();
                    return Ok(Some(summary));
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    // the loop thread died with the navigator
                    game_loop.pause();
                    return Ok(None);
                }
            }

            if let Some(byte) = self.next_byte()? {
                self.decoder.push(byte);
            }
            while let Some(event) = self.decoder.next_event() {
                match event {
                    TerminalEvent::Release { x, y } => {
                        mapper.on_release(x, y);
                    }
                    TerminalEvent::Key(b'q') => {
                        game_loop.pause();
                        info!("session left from the keyboard");
                        return Ok(None);
                    }
                    TerminalEvent::Key(_) => {}
                }
            }
        }
    }
}
