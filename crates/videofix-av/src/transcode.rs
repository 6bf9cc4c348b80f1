//! Running the transcoder.

use crate::{Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Run an argument vector produced by [`crate::build_transcode_args`].
///
/// The leading program name is replaced by `ffmpeg`, the resolved executable.
/// ffmpeg's own output is passed through to the terminal so its progress
/// stays visible; it is never parsed.
///
/// # Errors
///
/// Returns [`Error::ToolFailed`] if ffmpeg exits with a non-zero status.
pub fn run_transcoder(ffmpeg: &Path, args: &[String]) -> Result<()> {
    let (_program, rest) = args
        .split_first()
        .ok_or_else(|| Error::InvalidInput("empty transcoder command".to_string()))?;

    #[cfg(feature = "tracing")]
    tracing::debug!("Running {:?} with {} arguments", ffmpeg, rest.len());

    let status = Command::new(ffmpeg)
        .args(rest)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found("ffmpeg")
            } else {
                Error::Io(e)
            }
        })?;

    if !status.success() {
        return Err(Error::tool_failed("ffmpeg", format!("exited with {status}")));
    }

    Ok(())
}
