//! Playback session state

use std::fmt;

/// Playback state of the current video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing playing; also the state before anything has been played
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaybackState::Stopped => "STOPPED",
            PlaybackState::Playing => "PLAYING",
            PlaybackState::Paused => "PAUSED",
        };
        f.write_str(name)
    }
}

/// What the player is doing right now.
///
/// `current_video` holds a video ID, not the video. It stays set after a
/// stop and is only replaced by the next successful play.
#[derive(Debug, Clone, Default)]
pub struct PlayerSession {
    current_video: Option<String>,
    state: PlaybackState,
}

impl PlayerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Last video that was played, even if it has since been stopped
    pub fn current_video(&self) -> Option<&str> {
        self.current_video.as_deref()
    }

    /// ID of the video that is playing or paused
    pub fn active_video(&self) -> Option<&str> {
        match self.state {
            PlaybackState::Stopped => None,
            PlaybackState::Playing | PlaybackState::Paused => self.current_video.as_deref(),
        }
    }

    pub fn start(&mut self, video_id: String) {
        self.current_video = Some(video_id);
        self.state = PlaybackState::Playing;
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    pub fn resume(&mut self) {
        self.state = PlaybackState::Playing;
    }
}
