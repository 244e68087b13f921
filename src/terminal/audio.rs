use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::{DEATH_SOUND_FILE, EAT_SOUND_FILE};
use crate::platform::AudioCue;

const BELL: &[u8] = b"\x07";

/// A sound asset loaded in memory
#[derive(Debug, Clone)]
struct Cue {
    data: Vec<u8>,
}

/// Sound cues rung on the terminal bell. A cue whose asset failed to load stays silent.
#[derive(Debug, Clone, Default)]
pub struct TerminalAudio {
    eat: Option<Cue>,
    death: Option<Cue>,
}

fn load_cue(dir: &Path, file: &str) -> Option<Cue> {
    let path = dir.join(file);
    let loaded: Result<Vec<u8>> =
        fs::read(&path).with_context(|| format!("failed to load {}", path.display()));
    match loaded {
        Ok(data) => {
            info!("loaded sound {} ({} bytes)", path.display(), data.len());
            Some(Cue { data })
        }
        Err(err) => {
            warn!("{err:#}, sound disabled");
            None
        }
    }
}

// an empty asset counts as missing
fn audible(cue: &Option<Cue>) -> bool {
    cue.as_ref().is_some_and(|cue| !cue.data.is_empty())
}

impl TerminalAudio {
    /// Load both cues from `dir`, failures are not fatal
    pub fn load(dir: &Path) -> Self {
        TerminalAudio {
            eat: load_cue(dir, EAT_SOUND_FILE),
            death: load_cue(dir, DEATH_SOUND_FILE),
        }
    }

    pub fn has_eat_sound(&self) -> bool {
        audible(&self.eat)
    }

    pub fn has_death_sound(&self) -> bool {
        audible(&self.death)
    }

    fn ring(cue: &Option<Cue>) {
        if !audible(cue) {
            return;
        }
        let mut stdout = io::stdout();
        // fire and forget
        let _ = stdout.write_all(BELL).and_then(|_| stdout.flush());
    }
}

impl AudioCue for TerminalAudio {
    fn play_eat_sound(&mut self) {
        Self::ring(&self.eat);
    }

    fn play_death_sound(&mut self) {
        Self::ring(&self.death);
    }
}
