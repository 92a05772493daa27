//! Title and tag search over the video catalogue

use super::Report;
use crate::model::{Video, VideoLibrary};

/// Question asked after a non-empty result list
pub const PLAY_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

/// Which part of a video a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Case-insensitive substring of the title
    Title,
    /// Case-insensitive exact tag; the term must start with `#`
    Tag,
}

impl SearchField {
    /// Whether `term` can produce any results for this field
    fn accepts(&self, term: &str) -> bool {
        match self {
            SearchField::Title => true,
            SearchField::Tag => term.starts_with('#'),
        }
    }

    fn matches(&self, video: &Video, term: &str) -> bool {
        match self {
            SearchField::Title => video.title_contains(term),
            SearchField::Tag => video.has_tag(term),
        }
    }
}

/// Ranked matches for one search, numbered from 1
#[derive(Debug, Clone)]
pub struct SearchResults {
    term: String,
    entries: Vec<(String, String)>, // (video_id, formatted video)
}

impl SearchResults {
    /// Scan `library` in title order, skipping flagged videos
    pub fn collect(library: &VideoLibrary, field: SearchField, term: &str) -> Self {
        let entries = if field.accepts(term) {
            library
                .sorted_by_title()
                .into_iter()
                .filter(|video| !video.is_flagged() && field.matches(video, term))
                .map(|video| (video.video_id().to_string(), video.to_string()))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            term: term.to_string(),
            entries,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matching video IDs in ranked order
    pub fn video_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Header plus the numbered result lines
    pub fn report(&self) -> Report {
        let mut report = Report::line(format!("Here are the results for {}:", self.term()));
        for (index, (_, formatted)) in self.entries.iter().enumerate() {
            report.push(format!("{}) {}", index + 1, formatted));
        }
        report
    }

    /// Resolve a reply to the play prompt.
    ///
    /// Anything that is not a number in `1..=len` selects nothing.
    pub fn select(&self, reply: &str) -> Option<&str> {
        let number: usize = reply.trim().parse().ok()?;
        let index = number.checked_sub(1)?;
        self.entries.get(index).map(|(id, _)| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> VideoLibrary {
        vec![
            Video::new(
                "Amazing Cat Video",
                "cat1",
                vec!["#cat".to_string(), "#animal".to_string()],
            ),
            Video::new("Funny Dog VIdeo", "dog2", vec!["#dog".to_string()]),
            Video::new("Another Cat Video", "cat2", vec!["#CAT".to_string()]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_tag_search_example() {
        let lib: VideoLibrary = library()
            .videos()
            .filter(|v| v.video_id() != "cat2")
            .cloned()
            .collect();
        let results = SearchResults::collect(&lib, SearchField::Tag, "#cat");

        assert_eq!(
            results.report().into_lines(),
            [
                "Here are the results for #cat:",
                "1) Amazing Cat Video (cat1) [#cat #animal]",
            ]
        );
    }

    #[test]
    fn test_title_search_ranks_by_title() {
        let results = SearchResults::collect(&library(), SearchField::Title, "VIDEO");
        assert_eq!(results.term(), "VIDEO");
        let ids: Vec<&str> = results.video_ids().collect();
        assert_eq!(ids, ["cat1", "cat2", "dog2"]);
    }

    #[test]
    fn test_tag_search_needs_hash_prefix() {
        let results = SearchResults::collect(&library(), SearchField::Tag, "cat");
        assert!(results.is_empty());

        let results = SearchResults::collect(&library(), SearchField::Tag, "");
        assert!(results.is_empty());
    }

    #[test]
    fn test_tag_search_is_exact_and_case_insensitive() {
        let results = SearchResults::collect(&library(), SearchField::Tag, "#Cat");
        assert_eq!(results.len(), 2);

        let results = SearchResults::collect(&library(), SearchField::Tag, "#ca");
        assert!(results.is_empty());
    }

    #[test]
    fn test_flagged_videos_are_excluded() {
        let mut lib = library();
        lib.get_mut("cat1").unwrap().set_flag("reason");

        let results = SearchResults::collect(&lib, SearchField::Title, "cat");
        let ids: Vec<&str> = results.video_ids().collect();
        assert_eq!(ids, ["cat2"]);
    }

    #[test]
    fn test_select_bounds() {
        let results = SearchResults::collect(&library(), SearchField::Title, "video");

        assert_eq!(results.select("1"), Some("cat1"));
        assert_eq!(results.select(" 3 \n"), Some("dog2"));
        assert_eq!(results.select("0"), None);
        assert_eq!(results.select("4"), None);
        assert_eq!(results.select("-1"), None);
        assert_eq!(results.select("no"), None);
        assert_eq!(results.select(""), None);
    }
}
