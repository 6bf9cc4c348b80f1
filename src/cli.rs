use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "videofix")]
#[command(
    author,
    version,
    about = "Fix common problems in MKV files",
    long_about = "Fix common problems in MKV files.\n\n\
        E-AC-3 audio is converted to AAC, tracks in the default language are \
        flagged as default, and all other tracks and metadata are copied. \
        Files are rewritten in place."
)]
pub struct Cli {
    /// MKV files to fix
    #[arg(required_unless_present = "check_tools")]
    pub files: Vec<PathBuf>,

    /// Default language for audio and subtitle tracks (e.g. "eng")
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Remove audio and subtitle tracks not in the default language (requires --lang)
    #[arg(long)]
    pub prune: bool,

    /// Print the ffmpeg command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Check that mkvmerge and ffmpeg are available, then exit
    #[arg(long)]
    pub check_tools: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
