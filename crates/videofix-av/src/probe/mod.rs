//! Track probing module.
//!
//! Tracks are read with `mkvmerge --identify -F json`, which reports the
//! container's own track IDs. Those IDs are what ffmpeg's `-map 0:<id>`
//! expects for Matroska input.

mod mkvmerge;
mod types;

pub use mkvmerge::{parse_identify_output, probe_tracks};
pub use types::*;
