//! Player command processing
//!
//! [`VideoPlayer`] owns the catalogue, the playlists and the playback
//! session. Every command returns either a [`Report`] of lines to show or a
//! [`CommandError`](crate::error::CommandError) naming what went wrong.
//! Search is split in two steps, [`VideoPlayer::search`] and
//! [`VideoPlayer::play_from_results`], so the follow-up question can be
//! answered without a real input stream.

mod controller;
mod report;
mod search;
mod state;

pub use controller::{CommandResult, VideoPlayer, DEFAULT_FLAG_REASON};
pub use report::Report;
pub use search::{SearchField, SearchResults, PLAY_PROMPT};
pub use state::{PlaybackState, PlayerSession};
