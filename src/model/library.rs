use super::Video;
use std::collections::HashMap;

/// Catalogue of every known video, indexed by ID
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    videos: HashMap<String, Video>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Add a video to the library
    ///
    /// Returns false and leaves the existing entry alone if the ID is taken.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.videos.contains_key(video.video_id()) {
            return false;
        }
        self.videos.insert(video.video_id().to_string(), video);
        true
    }

    /// Get a video by ID
    pub fn get(&self, video_id: &str) -> Option<&Video> {
        self.videos.get(video_id)
    }

    pub fn get_mut(&mut self, video_id: &str) -> Option<&mut Video> {
        self.videos.get_mut(video_id)
    }

    /// Get all videos (unordered)
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// All videos ordered by title
    pub fn sorted_by_title(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.values().collect();
        videos.sort_by(|a, b| {
            a.title()
                .cmp(b.title())
                .then_with(|| a.video_id().cmp(b.video_id()))
        });
        videos
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for VideoLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Video> for VideoLibrary {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut library = Self::new();
        for video in iter {
            library.add_video(video);
        }
        library
    }
}
