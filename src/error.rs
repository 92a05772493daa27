//! User-facing command failures
//!
//! Each variant renders to the exact line shown to the user. None of these
//! are fatal; the shell prints them and reads the next command.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    // Playback
    #[error("Cannot play video: Video does not exist")]
    PlayMissing,

    #[error("Cannot play video: Video is currently flagged (reason: {reason})")]
    PlayFlagged { reason: String },

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("Cannot stop video: No video is currently playing")]
    StopNothingPlaying,

    #[error("Cannot pause video: No video is currently playing")]
    PauseNothingPlaying,

    #[error("Video already paused: {title}")]
    AlreadyPaused { title: String },

    #[error("Cannot continue video: No video is currently playing")]
    ContinueNothingPlaying,

    #[error("Cannot continue video: Video is not paused")]
    NotPaused,

    #[error("No video is currently playing")]
    NothingPlaying,

    // Flagging
    #[error("Cannot flag video: Video does not exist")]
    FlagMissing,

    #[error("Cannot flag video: Video is already flagged")]
    AlreadyFlagged,

    #[error("Cannot remove flag from video: Video does not exist")]
    AllowMissing,

    #[error("Cannot remove flag from video: Video is not flagged")]
    NotFlagged,

    // Playlists
    #[error("Cannot create playlist: A playlist with the same name already exists")]
    PlaylistExists,

    #[error("Cannot add video to {playlist}: {target} does not exist")]
    AddMissing { playlist: String, target: Target },

    #[error("Cannot add video to {playlist}: Video already added")]
    AlreadyAdded { playlist: String },

    #[error("Cannot add video to {playlist}: Video is currently flagged (reason: {reason})")]
    AddFlagged { playlist: String, reason: String },

    #[error("Cannot remove video from {playlist}: {target} does not exist")]
    RemoveMissing { playlist: String, target: Target },

    #[error("Cannot remove video from {playlist}: Video is not in playlist")]
    NotInPlaylist { playlist: String },

    #[error("Cannot clear playlist {playlist}: Playlist does not exist")]
    ClearMissing { playlist: String },

    #[error("Cannot delete playlist {playlist}: Playlist does not exist")]
    DeleteMissing { playlist: String },

    #[error("Cannot show playlist {playlist}: Playlist does not exist")]
    ShowMissing { playlist: String },

    // Search
    #[error("No search results for {term}")]
    NoSearchResults { term: String },
}

/// Which entity a two-cause "does not exist" failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Playlist,
    Video,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Playlist => f.write_str("Playlist"),
            Target::Video => f.write_str("Video"),
        }
    }
}
