use serde::{Deserialize, Serialize};

/// Represents a user-created playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, casing as given at creation
    pub name: String,

    /// Video IDs (ordered, no duplicates)
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Video IDs in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append a video; returns false if it was already present
    pub fn add_video(&mut self, video_id: String) -> bool {
        if self.contains(&video_id) {
            return false;
        }
        self.video_ids.push(video_id);
        true
    }

    /// Remove a video; returns false if it was not present
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(index) => {
                self.video_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every video, keeping the playlist itself
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicates() {
        let mut playlist = Playlist::new("My Playlist".to_string());
        assert!(playlist.add_video("a".to_string()));
        assert!(playlist.add_video("b".to_string()));
        assert!(!playlist.add_video("a".to_string()));
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.video_ids(), ["a", "b"]);
    }

    #[test]
    fn test_add_then_remove_restores_order() {
        let mut playlist = Playlist::new("My Playlist".to_string());
        playlist.add_video("a".to_string());
        playlist.add_video("b".to_string());

        playlist.add_video("c".to_string());
        assert!(playlist.remove_video("c"));
        assert_eq!(playlist.video_ids(), ["a", "b"]);
        assert!(!playlist.remove_video("c"));
    }

    #[test]
    fn test_clear_keeps_name() {
        let mut playlist = Playlist::new("My Playlist".to_string());
        playlist.add_video("a".to_string());
        playlist.clear();
        assert!(playlist.is_empty());
        assert_eq!(playlist.name, "My Playlist");
    }
}
