//! External tool detection and management.
//!
//! videofix needs two programs: `mkvmerge` (from mkvtoolnix) to read the
//! track list and `ffmpeg` to rewrite the file.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Tools required for a run, in the order they are checked.
pub const REQUIRED_TOOLS: &[&str] = &["mkvmerge", "ffmpeg"];

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Optional overrides for tool locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Path to the ffmpeg executable.
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,
    /// Path to the mkvmerge executable.
    #[serde(default)]
    pub mkvmerge_path: Option<PathBuf>,
}

/// Resolved locations of the required tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    /// mkvmerge, used for probing.
    pub mkvmerge: PathBuf,
    /// ffmpeg, used for transcoding.
    pub ffmpeg: PathBuf,
}

impl Tools {
    /// Resolve every required tool, preferring configured paths over `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] for the first tool that cannot be found.
    pub fn discover(config: &ToolsConfig) -> Result<Self> {
        let mkvmerge = get_tool_path("mkvmerge", config.mkvmerge_path.as_deref())?;
        let ffmpeg = get_tool_path("ffmpeg", config.ffmpeg_path.as_deref())?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Using mkvmerge at {:?}, ffmpeg at {:?}", mkvmerge, ffmpeg);

        Ok(Self { mkvmerge, ffmpeg })
    }
}

/// Check if a tool is available and get its information.
///
/// # Example
///
/// ```no_run
/// use videofix_av::check_tool;
///
/// let info = check_tool("mkvmerge");
/// if info.available {
///     println!("mkvmerge version: {:?}", info.version);
/// }
/// ```
pub fn check_tool(name: &str) -> ToolInfo {
    check_tool_with_arg(name, version_arg(name))
}

/// Check if a tool is available using a custom version argument.
pub fn check_tool_with_arg(name: &str, version_arg: &str) -> ToolInfo {
    let result = Command::new(name).arg(version_arg).output();

    match result {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string());

            let path = which::which(name).ok();

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
                path,
            }
        }
        _ => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
        },
    }
}

/// Check every tool videofix depends on.
pub fn check_tools() -> Vec<ToolInfo> {
    REQUIRED_TOOLS.iter().map(|name| check_tool(name)).collect()
}

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Configured {} path {:?} does not exist, searching PATH",
            name,
            path
        );
    }

    require_tool(name)
}

fn version_arg(name: &str) -> &'static str {
    match name {
        "ffmpeg" | "ffprobe" => "-version",
        _ => "--version",
    }
}
