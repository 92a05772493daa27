//! Interactive command shell
//!
//! Reads one command per line, runs it against a [`VideoPlayer`] and writes
//! the resulting lines. The only other read is the reply to the play
//! question that follows a search.

mod command;
mod config;

pub use command::{Command, InvalidCommand, HELP_TEXT};
pub use config::{ShellConfig, DEFAULT_CATALOGUE};

use crate::player::{CommandResult, Report, SearchField, VideoPlayer, PLAY_PROMPT};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Whether the shell keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command loop bound to an input and an output stream
pub struct Shell<R, W> {
    player: VideoPlayer,
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(player: VideoPlayer, config: ShellConfig, input: R, output: W) -> Self {
        Self {
            player,
            config,
            input,
            output,
        }
    }

    pub fn player(&self) -> &VideoPlayer {
        &self.player
    }

    /// Give back the player and the output stream
    pub fn into_parts(self) -> (VideoPlayer, W) {
        (self.player, self.output)
    }

    /// Run commands until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Hello and welcome to the video player! Type HELP for a list of available commands."
        )?;

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                log::debug!("End of input");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            if self.execute_line(&line)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Video player is shutting down. Bye!")?;
        Ok(())
    }

    /// Parse and run a single command line
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(err) => {
                log::debug!("Rejected command line {:?}", line.trim());
                writeln!(self.output, "{}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        log::debug!("Executing {:?}", command);

        let result = match command {
            Command::NumberOfVideos => Ok(self.player.number_of_videos()),
            Command::ShowAllVideos => Ok(self.player.show_all_videos()),
            Command::Play(id) => self.player.play_video(&id),
            Command::PlayRandom => self.player.play_random_video(),
            Command::Stop => self.player.stop_video(),
            Command::Pause => self.player.pause_video(),
            Command::Continue => self.player.continue_video(),
            Command::ShowPlaying => self.player.show_playing(),
            Command::CreatePlaylist(name) => self.player.create_playlist(&name),
            Command::AddToPlaylist { playlist, video_id } => {
                self.player.add_to_playlist(&playlist, &video_id)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                self.player.remove_from_playlist(&playlist, &video_id)
            }
            Command::ClearPlaylist(name) => self.player.clear_playlist(&name),
            Command::DeletePlaylist(name) => self.player.delete_playlist(&name),
            Command::ShowPlaylist(name) => self.player.show_playlist(&name),
            Command::ShowAllPlaylists => Ok(self.player.show_all_playlists()),
            Command::SearchVideos(term) => {
                self.search(SearchField::Title, &term)?;
                return Ok(Flow::Continue);
            }
            Command::SearchVideosWithTag(tag) => {
                self.search(SearchField::Tag, &tag)?;
                return Ok(Flow::Continue);
            }
            Command::FlagVideo { video_id, reason } => {
                self.player.flag_video(&video_id, reason.as_deref())
            }
            Command::AllowVideo(id) => self.player.allow_video(&id),
            Command::Help => Ok(Report::line(HELP_TEXT)),
            Command::Exit => return Ok(Flow::Exit),
        };

        self.emit(result)?;
        Ok(Flow::Continue)
    }

    /// List search results, then optionally ask which one to play
    fn search(&mut self, field: SearchField, term: &str) -> Result<()> {
        let results = match self.player.search(field, term) {
            Ok(results) => results,
            Err(err) => return self.emit(Err(err)),
        };

        self.emit(Ok(results.report()))?;
        if !self.config.search_prompt {
            return Ok(());
        }

        for line in PLAY_PROMPT {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;

        let reply = self.read_line()?.unwrap_or_default();
        match self.player.play_from_results(&results, &reply) {
            Some(outcome) => self.emit(outcome),
            None => {
                log::debug!("No result picked for reply {:?}", reply.trim());
                Ok(())
            }
        }
    }

    fn emit(&mut self, result: CommandResult) -> Result<()> {
        match result {
            Ok(report) => writeln!(self.output, "{}", report)?,
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(())
    }

    /// Next input line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
