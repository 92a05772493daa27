//! Video Player - command-driven video library and playback
//!
//! Keeps a catalogue of videos, user playlists and a single playback
//! session, and answers text commands against them.

pub mod error;
pub mod library;
pub mod model;
pub mod player;
pub mod shell;

pub use error::CommandError;
pub use player::{Report, VideoPlayer};
pub use shell::{Shell, ShellConfig};
