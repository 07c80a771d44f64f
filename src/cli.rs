use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::download::quality::Quality;

#[derive(Parser, Debug)]
#[command(name = "tubedrop")]
#[command(author, version, about = "Telegram bot that downloads YouTube videos and audio", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Download one link locally, without Telegram
    Fetch {
        /// Video link
        url: String,

        /// Quality token: 1080, 720, 480, 360 or "Audio (mp3)"
        #[arg(short, long, default_value = "720", value_parser = parse_quality)]
        quality: Quality,

        /// Directory the validated file is copied to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Print the version of the configured yt-dlp binary
    CheckTool,
}

fn parse_quality(token: &str) -> Result<Quality, String> {
    Quality::from_token(token).ok_or_else(|| {
        let known: Vec<String> = crate::download::quality::quality_options()
            .into_iter()
            .map(|o| o.token)
            .collect();
        format!("unknown quality '{}', expected one of: {}", token, known.join(", "))
    })
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
