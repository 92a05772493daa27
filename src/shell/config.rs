//! Shell configuration

use std::path::PathBuf;

/// Default location of the video catalogue, relative to the working directory
pub const DEFAULT_CATALOGUE: &str = "data/videos.txt";

/// Configuration for an interactive session
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Video catalogue file
    pub videos_path: PathBuf,

    /// Ask which result to play after a successful search
    pub search_prompt: bool,

    /// Text printed before each command is read
    pub prompt: String,
}

impl ShellConfig {
    /// Create a new shell configuration
    pub fn new(videos_path: PathBuf) -> Self {
        Self {
            videos_path,
            search_prompt: true,
            prompt: "> ".to_string(),
        }
    }

    /// Enable or disable the play question after searches
    pub fn with_search_prompt(mut self, enabled: bool) -> Self {
        self.search_prompt = enabled;
        self
    }

    /// Set the command prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_CATALOGUE))
    }
}
