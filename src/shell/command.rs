//! Command line parsing
//!
//! Command words are case-insensitive; arguments are whitespace separated
//! and keep their casing.

use std::str::FromStr;
use thiserror::Error;

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter a valid command, type HELP for a list of available commands.")]
pub struct InvalidCommand;

pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

impl FromStr for Command {
    type Err = InvalidCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (name, args) = words.split_first().ok_or(InvalidCommand)?;

        let command = match (name.to_uppercase().as_str(), args) {
            ("NUMBER_OF_VIDEOS", []) => Command::NumberOfVideos,
            ("SHOW_ALL_VIDEOS", []) => Command::ShowAllVideos,
            ("PLAY", [id]) => Command::Play(id.to_string()),
            ("PLAY_RANDOM", []) => Command::PlayRandom,
            ("STOP", []) => Command::Stop,
            ("PAUSE", []) => Command::Pause,
            ("CONTINUE", []) => Command::Continue,
            ("SHOW_PLAYING", []) => Command::ShowPlaying,
            ("CREATE_PLAYLIST", [name]) => Command::CreatePlaylist(name.to_string()),
            ("ADD_TO_PLAYLIST", [playlist, id]) => Command::AddToPlaylist {
                playlist: playlist.to_string(),
                video_id: id.to_string(),
            },
            ("REMOVE_FROM_PLAYLIST", [playlist, id]) => Command::RemoveFromPlaylist {
                playlist: playlist.to_string(),
                video_id: id.to_string(),
            },
            ("CLEAR_PLAYLIST", [name]) => Command::ClearPlaylist(name.to_string()),
            ("DELETE_PLAYLIST", [name]) => Command::DeletePlaylist(name.to_string()),
            ("SHOW_PLAYLIST", [name]) => Command::ShowPlaylist(name.to_string()),
            ("SHOW_ALL_PLAYLISTS", []) => Command::ShowAllPlaylists,
            ("SEARCH_VIDEOS", [term]) => Command::SearchVideos(term.to_string()),
            ("SEARCH_VIDEOS_WITH_TAG", [tag]) => Command::SearchVideosWithTag(tag.to_string()),
            ("FLAG_VIDEO", [id, reason @ ..]) => Command::FlagVideo {
                video_id: id.to_string(),
                reason: (!reason.is_empty()).then(|| reason.join(" ")),
            },
            ("ALLOW_VIDEO", [id]) => Command::AllowVideo(id.to_string()),
            ("HELP", _) => Command::Help,
            ("EXIT", _) => Command::Exit,
            _ => return Err(InvalidCommand),
        };

        Ok(command)
    }
}
