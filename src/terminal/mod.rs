//! Terminal front end: raw stdin with mouse reporting, colored block drawing,
//! the bell as sound and a text menu between sessions.

mod app;
mod audio;
mod menu;
mod pointer;
mod render;
mod streams;

pub use app::App;
pub use audio::TerminalAudio;
pub use menu::ChannelNavigator;
pub use pointer::{PointerDecoder, TerminalEvent};
pub use render::TerminalRenderer;
pub use streams::Streams;
