//! # videofix-av
//!
//! Fix common problems in Matroska files by remuxing them with ffmpeg.
//!
//! This crate provides functionality for:
//! - Reading the track list of an MKV file with mkvmerge
//! - Classifying tracks by type, codec and language
//! - Building the ffmpeg command that converts E-AC-3 audio to AAC, sets the
//!   default track flags and optionally prunes unwanted languages
//! - Running ffmpeg and replacing the original file with the result
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use videofix_av::{build_transcode_args, probe_tracks, Tools, ToolsConfig, Workspace};
//!
//! let tools = Tools::discover(&ToolsConfig::default())?;
//! let workspace = Workspace::new("/path/to/movie.mkv")?;
//! let tracks = probe_tracks(&tools.mkvmerge, workspace.input())?;
//! let args = build_transcode_args(workspace.input(), workspace.output(), &tracks, false, "eng");
//! println!("{}", args.join(" "));
//! # Ok::<(), videofix_av::Error>(())
//! ```

pub mod command;
mod error;
pub mod probe;
pub mod tools;
pub mod tracks;
pub mod transcode;
pub mod workspace;

// Re-exports
pub use command::{build_transcode_args, needs_processing, quote_args};
pub use error::{Error, Result};
pub use probe::{parse_identify_output, probe_tracks, Track, TrackType};
pub use tools::{check_tool, check_tools, require_tool, ToolInfo, Tools, ToolsConfig};
pub use tracks::{
    check_prune_safety, filter_tracks, language_and_disposition, resolve_language, Disposition,
};
pub use transcode::run_transcoder;
pub use workspace::Workspace;
