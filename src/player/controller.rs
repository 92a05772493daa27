//! Command handling for the video player

use super::search::{SearchField, SearchResults};
use super::state::{PlaybackState, PlayerSession};
use super::Report;
use crate::error::{CommandError, Target};
use crate::model::{PlaylistLibrary, VideoLibrary};
use rand::Rng;

/// Outcome of a single command
pub type CommandResult = Result<Report, CommandError>;

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Owns the catalogue, the playlists and the playback session, and applies
/// one command at a time to them.
#[derive(Debug, Clone)]
pub struct VideoPlayer {
    videos: VideoLibrary,
    playlists: PlaylistLibrary,
    session: PlayerSession,
}

impl VideoPlayer {
    /// Create a player over a loaded catalogue, with no playlists and
    /// nothing playing
    pub fn new(videos: VideoLibrary) -> Self {
        Self {
            videos,
            playlists: PlaylistLibrary::new(),
            session: PlayerSession::new(),
        }
    }

    pub fn videos(&self) -> &VideoLibrary {
        &self.videos
    }

    pub fn playlists(&self) -> &PlaylistLibrary {
        &self.playlists
    }

    pub fn state(&self) -> PlaybackState {
        self.session.state()
    }

    /// Last video started, even if it has since been stopped
    pub fn current_video(&self) -> Option<&str> {
        self.session.current_video()
    }

    // ---- Library ----

    pub fn number_of_videos(&self) -> Report {
        Report::line(format!("{} videos in the library", self.videos.len()))
    }

    pub fn show_all_videos(&self) -> Report {
        let mut report = Report::line("Here's a list of all available videos:");
        for video in self.videos.sorted_by_title() {
            report.push(video.to_string());
        }
        report
    }

    // ---- Playback ----

    /// Play a video, stopping whatever is playing or paused first.
    ///
    /// A missing or flagged video leaves the session untouched.
    pub fn play_video(&mut self, video_id: &str) -> CommandResult {
        let video = self.videos.get(video_id).ok_or(CommandError::PlayMissing)?;
        if let Some(reason) = video.flag_reason() {
            return Err(CommandError::PlayFlagged {
                reason: reason.to_string(),
            });
        }
        let title = video.title().to_string();

        let mut report = Report::new();
        if let Some(line) = self.stop_active() {
            report.push(line);
        }

        log::debug!("Playing {}", video_id);
        self.session.start(video_id.to_string());
        report.push(format!("Playing video: {}", title));
        Ok(report)
    }

    pub fn stop_video(&mut self) -> CommandResult {
        self.stop_active()
            .map(Report::line)
            .ok_or(CommandError::StopNothingPlaying)
    }

    /// Play a random unflagged video using the thread-local RNG
    pub fn play_random_video(&mut self) -> CommandResult {
        self.play_random_video_with(&mut rand::thread_rng())
    }

    /// Play a random unflagged video, uniformly chosen with `rng`
    pub fn play_random_video_with<R: Rng>(&mut self, rng: &mut R) -> CommandResult {
        let candidates: Vec<String> = self
            .videos
            .sorted_by_title()
            .into_iter()
            .filter(|video| !video.is_flagged())
            .map(|video| video.video_id().to_string())
            .collect();

        if candidates.is_empty() {
            return Err(CommandError::NoVideosAvailable);
        }

        let index = rng.gen_range(0..candidates.len());
        log::debug!("Random pick {} of {}", index + 1, candidates.len());
        self.play_video(&candidates[index])
    }

    pub fn pause_video(&mut self) -> CommandResult {
        let title = self
            .active_title()
            .ok_or(CommandError::PauseNothingPlaying)?;

        if self.session.state() == PlaybackState::Paused {
            return Err(CommandError::AlreadyPaused { title });
        }

        self.session.pause();
        Ok(Report::line(format!("Pausing video: {}", title)))
    }

    pub fn continue_video(&mut self) -> CommandResult {
        let title = self
            .active_title()
            .ok_or(CommandError::ContinueNothingPlaying)?;

        if self.session.state() != PlaybackState::Paused {
            return Err(CommandError::NotPaused);
        }

        self.session.resume();
        Ok(Report::line(format!("Continuing video: {}", title)))
    }

    pub fn show_playing(&self) -> CommandResult {
        let video = self
            .session
            .active_video()
            .and_then(|id| self.videos.get(id))
            .ok_or(CommandError::NothingPlaying)?;

        let mut line = format!("Currently playing: {}", video);
        if self.session.state() == PlaybackState::Paused {
            line.push_str(" - PAUSED");
        }
        Ok(Report::line(line))
    }

    /// Title of the playing or paused video
    fn active_title(&self) -> Option<String> {
        self.session
            .active_video()
            .and_then(|id| self.videos.get(id))
            .map(|video| video.title().to_string())
    }

    /// Stop the active video, returning the line to report
    fn stop_active(&mut self) -> Option<String> {
        let title = self.active_title()?;
        log::debug!("Stopping {:?}", self.session.active_video());
        self.session.stop();
        Some(format!("Stopping video: {}", title))
    }

    // ---- Flagging ----

    /// Flag a video. Stops it if it is the one playing or paused.
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> CommandResult {
        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON);
        let video = self
            .videos
            .get_mut(video_id)
            .ok_or(CommandError::FlagMissing)?;

        if video.is_flagged() {
            return Err(CommandError::AlreadyFlagged);
        }

        video.set_flag(reason);
        let title = video.title().to_string();
        log::debug!("Flagged {} ({})", video_id, reason);

        let mut report = Report::new();
        if self.session.active_video() == Some(video_id) {
            if let Some(line) = self.stop_active() {
                report.push(line);
            }
        }
        report.push(format!(
            "Successfully flagged video: {} (reason: {})",
            title, reason
        ));
        Ok(report)
    }

    pub fn allow_video(&mut self, video_id: &str) -> CommandResult {
        let video = self
            .videos
            .get_mut(video_id)
            .ok_or(CommandError::AllowMissing)?;

        if !video.is_flagged() {
            return Err(CommandError::NotFlagged);
        }

        video.clear_flag();
        log::debug!("Unflagged {}", video_id);
        Ok(Report::line(format!(
            "Successfully removed flag from video: {}",
            video.title()
        )))
    }

    // ---- Playlists ----

    pub fn create_playlist(&mut self, name: &str) -> CommandResult {
        if self.playlists.contains(name) {
            return Err(CommandError::PlaylistExists);
        }

        self.playlists.create(name);
        log::debug!("Created playlist {:?}", name);
        Ok(Report::line(format!(
            "Successfully created new playlist: {}",
            name
        )))
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> CommandResult {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| CommandError::AddMissing {
                playlist: name.to_string(),
                target: Target::Playlist,
            })?;

        let video = self
            .videos
            .get(video_id)
            .ok_or_else(|| CommandError::AddMissing {
                playlist: name.to_string(),
                target: Target::Video,
            })?;

        if playlist.contains(video_id) {
            return Err(CommandError::AlreadyAdded {
                playlist: name.to_string(),
            });
        }

        if let Some(reason) = video.flag_reason() {
            return Err(CommandError::AddFlagged {
                playlist: name.to_string(),
                reason: reason.to_string(),
            });
        }

        playlist.add_video(video_id.to_string());
        Ok(Report::line(format!(
            "Added video to {}: {}",
            name,
            video.title()
        )))
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> CommandResult {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| CommandError::RemoveMissing {
                playlist: name.to_string(),
                target: Target::Playlist,
            })?;

        let video = self
            .videos
            .get(video_id)
            .ok_or_else(|| CommandError::RemoveMissing {
                playlist: name.to_string(),
                target: Target::Video,
            })?;

        if !playlist.remove_video(video_id) {
            return Err(CommandError::NotInPlaylist {
                playlist: name.to_string(),
            });
        }

        Ok(Report::line(format!(
            "Removed video from {}: {}",
            name,
            video.title()
        )))
    }

    pub fn clear_playlist(&mut self, name: &str) -> CommandResult {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| CommandError::ClearMissing {
                playlist: name.to_string(),
            })?;

        playlist.clear();
        Ok(Report::line(format!(
            "Successfully removed all videos from {}",
            name
        )))
    }

    pub fn delete_playlist(&mut self, name: &str) -> CommandResult {
        self.playlists
            .remove(name)
            .ok_or_else(|| CommandError::DeleteMissing {
                playlist: name.to_string(),
            })?;

        log::debug!("Deleted playlist {:?}", name);
        Ok(Report::line(format!("Deleted playlist: {}", name)))
    }

    pub fn show_all_playlists(&self) -> Report {
        if self.playlists.is_empty() {
            return Report::line("No playlists exist yet");
        }

        let mut report = Report::line("Showing all playlists:");
        for playlist in self.playlists.sorted() {
            report.push(playlist.name.clone());
        }
        report
    }

    pub fn show_playlist(&self, name: &str) -> CommandResult {
        let playlist = self
            .playlists
            .get(name)
            .ok_or_else(|| CommandError::ShowMissing {
                playlist: name.to_string(),
            })?;

        let mut report = Report::line(format!("Showing playlist: {}", name));
        if playlist.is_empty() {
            report.push("No videos here yet");
            return Ok(report);
        }

        // Videos are never removed from the catalogue, so every ID resolves
        for video in playlist.video_ids().iter().filter_map(|id| self.videos.get(id)) {
            report.push(video.to_string());
        }
        Ok(report)
    }

    // ---- Search ----

    /// Run a search; an empty result is reported as an error line
    pub fn search(&self, field: SearchField, term: &str) -> Result<SearchResults, CommandError> {
        let results = SearchResults::collect(&self.videos, field, term);
        log::debug!("Search {:?} {:?}: {} result(s)", field, term, results.len());

        if results.is_empty() {
            return Err(CommandError::NoSearchResults {
                term: term.to_string(),
            });
        }
        Ok(results)
    }

    pub fn search_videos(&self, term: &str) -> Result<SearchResults, CommandError> {
        self.search(SearchField::Title, term)
    }

    pub fn search_videos_tag(&self, tag: &str) -> Result<SearchResults, CommandError> {
        self.search(SearchField::Tag, tag)
    }

    /// Answer the play prompt that follows a search.
    ///
    /// Returns `None` when the reply does not pick a result.
    pub fn play_from_results(
        &mut self,
        results: &SearchResults,
        reply: &str,
    ) -> Option<CommandResult> {
        let video_id = results.select(reply)?;
        Some(self.play_video(video_id))
    }
}
