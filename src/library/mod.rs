//! Video catalogue loading
//!
//! Reads the catalogue text file (one video per line) into a
//! [`VideoLibrary`](crate::model::VideoLibrary).

mod catalogue;

pub use catalogue::{parse_catalogue, parse_line};

use crate::model::VideoLibrary;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a complete video catalogue from disk
///
/// # Arguments
/// * `path` - Path to the catalogue file (`title | video_id | #tag1,#tag2`)
///
/// # Returns
/// A library holding every well-formed video in the file
pub fn load_library(path: &Path) -> Result<VideoLibrary> {
    log::info!("Loading video catalogue from {:?}", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read video catalogue: {:?}", path))?;

    let library = parse_catalogue(&text);
    log::info!("Loaded catalogue: {} videos", library.len());
    Ok(library)
}
