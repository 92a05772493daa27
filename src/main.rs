use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_player::library::load_library;
use video_player::shell::DEFAULT_CATALOGUE;
use video_player::{Shell, ShellConfig, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive video library and player", long_about = None)]
struct Args {
    /// Path to the video catalogue (title | id | tags per line)
    #[arg(long = "videos", default_value = DEFAULT_CATALOGUE)]
    videos: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Don't ask which result to play after a search
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let videos_path = shellexpand::tilde(&args.videos);
    let config = ShellConfig::new(PathBuf::from(videos_path.as_ref()))
        .with_search_prompt(!args.no_prompt);

    let library = load_library(&config.videos_path)?;

    let player = VideoPlayer::new(library);
    let stdin = io::stdin();
    let mut shell = Shell::new(player, config, stdin.lock(), io::stdout());
    shell.run()?;

    Ok(())
}
