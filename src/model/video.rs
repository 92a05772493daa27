use serde::{Deserialize, Serialize};
use std::fmt;

/// A single video in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    video_id: String,

    /// Video title
    title: String,

    /// Tags as loaded, in their original order
    tags: Vec<String>,

    /// Flag reason; `Some` exactly when the video is flagged
    flag: Option<String>,
}

impl Video {
    /// Create a new, unflagged video
    pub fn new(title: impl Into<String>, video_id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            tags,
            flag: None,
        }
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Reason given when the video was flagged
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Mark the video as flagged with the given reason
    pub fn set_flag(&mut self, reason: impl Into<String>) {
        self.flag = Some(reason.into());
    }

    /// Remove the flag and its reason
    pub fn clear_flag(&mut self) {
        self.flag = None;
    }

    /// Case-insensitive substring match against the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Case-insensitive exact match against one of the tags
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.video_id, self.tags.join(" "))?;
        if let Some(reason) = &self.flag {
            write!(f, " - FLAGGED (reason: {})", reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_video() -> Video {
        Video::new(
            "Amazing Cat Video",
            "cat1",
            vec!["#cat".to_string(), "#animal".to_string()],
        )
    }

    #[test]
    fn test_display_unflagged() {
        assert_eq!(cat_video().to_string(), "Amazing Cat Video (cat1) [#cat #animal]");
    }

    #[test]
    fn test_display_without_tags() {
        let video = Video::new("Video about nothing", "nothing_video_id", Vec::new());
        assert_eq!(video.to_string(), "Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn test_flag_and_clear() {
        let mut video = cat_video();
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), None);

        video.set_flag("dont_like_cats");
        assert!(video.is_flagged());
        assert_eq!(video.flag_reason(), Some("dont_like_cats"));
        assert_eq!(
            video.to_string(),
            "Amazing Cat Video (cat1) [#cat #animal] - FLAGGED (reason: dont_like_cats)"
        );

        video.clear_flag();
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), None);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let video = cat_video();
        assert!(video.title_contains("cAT"));
        assert!(!video.title_contains("dog"));
        assert!(video.has_tag("#CAT"));
        assert!(!video.has_tag("#ca"));
        assert!(!video.has_tag("cat"));
    }
}
