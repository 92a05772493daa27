//! Data model for the video catalogue and user playlists
//!
//! These types are plain in-memory stores; all command rules live in
//! the player module.

mod video;
mod playlist;
mod library;
mod playlists;

pub use video::Video;
pub use playlist::Playlist;
pub use library::VideoLibrary;
pub use playlists::PlaylistLibrary;
