use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use video_player::library::{load_library, parse_catalogue};
use video_player::player::PlaybackState;
use video_player::{Shell, ShellConfig, VideoPlayer};

const CATALOGUE: &str = "\
Amazing Cat Video | cat1 | #cat , #animal
Funny Dog VIdeo | dog2 | #dog
";

/// Run a full session and return everything written after the greeting
fn run_session(script: &str, config: ShellConfig) -> (VideoPlayer, Vec<String>) {
    let player = VideoPlayer::new(parse_catalogue(CATALOGUE));
    let config = config.with_prompt("");
    let mut shell = Shell::new(player, config, Cursor::new(script.to_string()), Vec::new());
    shell.run().unwrap();

    let (player, output) = shell.into_parts();
    let text = String::from_utf8(output).unwrap();
    let lines = text.lines().skip(1).map(str::to_string).collect();
    (player, lines)
}

#[test]
fn test_search_then_pick_result() {
    let (player, lines) = run_session(
        "SEARCH_VIDEOS_WITH_TAG #cat\n1\nEXIT\n",
        ShellConfig::default(),
    );

    assert_eq!(
        lines,
        [
            "Here are the results for #cat:",
            "1) Amazing Cat Video (cat1) [#cat #animal]",
            "Would you like to play any of the above? If yes, specify the number of the video.",
            "If your answer is not a valid number, we will assume it's a no.",
            "Playing video: Amazing Cat Video",
            "Video player is shutting down. Bye!",
        ]
    );
    assert_eq!(player.current_video(), Some("cat1"));
}

#[test]
fn test_search_reply_out_of_range_is_ignored() {
    let (player, lines) = run_session(
        "SEARCH_VIDEOS video\n3\nSHOW_PLAYING\n",
        ShellConfig::default(),
    );

    assert_eq!(lines[1], "1) Amazing Cat Video (cat1) [#cat #animal]");
    assert_eq!(lines[2], "2) Funny Dog VIdeo (dog2) [#dog]");
    assert_eq!(lines[5], "No video is currently playing");
    assert_eq!(player.state(), PlaybackState::Stopped);
}

#[test]
fn test_search_without_prompt_reads_next_command() {
    let config = ShellConfig::default().with_search_prompt(false);
    let (player, lines) = run_session("SEARCH_VIDEOS cat\nPLAY dog2\n", config);

    assert_eq!(
        lines,
        [
            "Here are the results for cat:",
            "1) Amazing Cat Video (cat1) [#cat #animal]",
            "Playing video: Funny Dog VIdeo",
            "Video player is shutting down. Bye!",
        ]
    );
    assert_eq!(player.current_video(), Some("dog2"));
}

#[test]
fn test_flag_then_play_is_refused() {
    let script = "\
PLAY cat1
FLAG_VIDEO dog2 fake
PLAY dog2
SHOW_PLAYING
";
    let (player, lines) = run_session(script, ShellConfig::default());

    assert_eq!(
        lines,
        [
            "Playing video: Amazing Cat Video",
            "Successfully flagged video: Funny Dog VIdeo (reason: fake)",
            "Cannot play video: Video is currently flagged (reason: fake)",
            "Currently playing: Amazing Cat Video (cat1) [#cat #animal]",
            "Video player is shutting down. Bye!",
        ]
    );
    assert_eq!(player.state(), PlaybackState::Playing);
}

#[test]
fn test_playlist_session() {
    let script = "\
SHOW_ALL_PLAYLISTS
CREATE_PLAYLIST My_Mix
create_playlist my_mix
ADD_TO_PLAYLIST my_MIX cat1
SHOW_PLAYLIST MY_MIX
SHOW_ALL_PLAYLISTS
";
    let (_, lines) = run_session(script, ShellConfig::default());

    assert_eq!(
        lines,
        [
            "No playlists exist yet",
            "Successfully created new playlist: My_Mix",
            "Cannot create playlist: A playlist with the same name already exists",
            "Added video to my_MIX: Amazing Cat Video",
            "Showing playlist: MY_MIX",
            "Amazing Cat Video (cat1) [#cat #animal]",
            "Showing all playlists:",
            "My_Mix",
            "Video player is shutting down. Bye!",
        ]
    );
}

#[test]
fn test_invalid_command_keeps_running() {
    let (_, lines) = run_session("DANCE\nNUMBER_OF_VIDEOS\n", ShellConfig::default());

    assert_eq!(
        lines,
        [
            "Please enter a valid command, type HELP for a list of available commands.",
            "2 videos in the library",
            "Video player is shutting down. Bye!",
        ]
    );
}

#[test]
fn test_load_library_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOGUE.as_bytes()).unwrap();

    let library = load_library(file.path()).unwrap();
    assert_eq!(library.len(), 2);
    assert_eq!(library.get("dog2").unwrap().tags(), ["#dog"]);
}

#[test]
fn test_load_library_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_library(&dir.path().join("videos.txt")).unwrap_err();
    assert!(err.to_string().contains("Failed to read video catalogue"));
}
