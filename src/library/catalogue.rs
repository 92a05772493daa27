//! Catalogue text format parser

use crate::model::{Video, VideoLibrary};

/// Parse one catalogue line into a video.
///
/// Format is `title | video_id | tag1,tag2,...`; the tags field may be
/// missing or empty. Returns `None` for lines without a title and ID.
pub fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().filter(|s| !s.is_empty())?;
    let video_id = fields.next().filter(|s| !s.is_empty())?;
    let tags: Vec<String> = fields
        .next()
        .map(|field| {
            field
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(title, video_id, tags))
}

/// Parse a whole catalogue, skipping blank and malformed lines
pub fn parse_catalogue(text: &str) -> VideoLibrary {
    let mut library = VideoLibrary::new();

    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(video) => {
                let video_id = video.video_id().to_string();
                if !library.add_video(video) {
                    log::warn!("Line {}: duplicate video id {:?}, skipped", number + 1, video_id);
                }
            }
            None => log::warn!("Line {}: malformed catalogue entry {:?}", number + 1, line),
        }
    }

    library
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_tags() {
        let video = parse_line("Amazing Cats | amazing_cats_video_id |  #cat , #animal").unwrap();
        assert_eq!(video.title(), "Amazing Cats");
        assert_eq!(video.video_id(), "amazing_cats_video_id");
        assert_eq!(video.tags(), ["#cat", "#animal"]);
    }

    #[test]
    fn test_parse_line_without_tags() {
        let video = parse_line("Video about nothing | nothing_video_id |").unwrap();
        assert!(video.tags().is_empty());

        let video = parse_line("Video about nothing | nothing_video_id").unwrap();
        assert!(video.tags().is_empty());
    }

    #[test]
    fn test_parse_line_rejects_missing_id() {
        assert!(parse_line("Just a title").is_none());
        assert!(parse_line("Title |   | #tag").is_none());
    }

    #[test]
    fn test_parse_catalogue_skips_bad_lines() {
        let text = "\
Funny Dogs | funny_dogs_video_id | #dog , #animal

not a video
Life at Google | life_at_google_video_id | #google , #career
Duplicate | funny_dogs_video_id |
";
        let library = parse_catalogue(text);
        assert_eq!(library.len(), 2);
        assert_eq!(library.get("funny_dogs_video_id").unwrap().title(), "Funny Dogs");
    }
}
