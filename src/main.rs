use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use touch_snake::terminal::{App, Streams};
use touch_snake::{Board, GameConfig};

#[derive(Parser)]
#[command(name = "touch-snake")]
#[command(version, about = "Snake steered by clicking the halves of the screen")]
struct Cli {
    /// Width of the playing surface in terminal columns
    #[arg(long, default_value = "80")]
    columns: i32,

    /// Height of the playing surface in terminal rows
    #[arg(long, default_value = "48")]
    rows: i32,

    /// Directory holding get_mouse_sound.ogg and death_sound.ogg
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.columns, cli.rows).with_assets_dir(cli.assets);
    // refuse surfaces too small for a board before touching the terminal
    Board::from_config(&config)?;

    let mut streams = Streams::setup()?;
    let keys = Streams::spawn_stdin_channel();
    let result = App::new(config, keys).run();
    streams.restore()?;
    result
}
