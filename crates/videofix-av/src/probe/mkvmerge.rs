//! mkvmerge-based track probing.

use super::types::*;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Deserialize)]
struct IdentifyOutput {
    #[serde(default)]
    tracks: Vec<IdentifyTrack>,
}

#[derive(Debug, Deserialize)]
struct IdentifyTrack {
    id: u32,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    codec: String,
    #[serde(default)]
    properties: IdentifyProperties,
}

#[derive(Debug, Default, Deserialize)]
struct IdentifyProperties {
    #[serde(default)]
    language: Option<String>,
}

/// Read the track list of a Matroska file with `mkvmerge --identify`.
pub fn probe_tracks(mkvmerge: &Path, path: &Path) -> Result<Vec<Track>> {
    let output = Command::new(mkvmerge)
        .args(["--identify", "-F", "json"])
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found("mkvmerge")
            } else {
                Error::Io(e)
            }
        })?;

    // mkvmerge returns 0 for success, 1 for warnings
    if !output.status.success() && output.status.code() != Some(1) {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let message = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(Error::tool_failed("mkvmerge", message));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error("mkvmerge", format!("Invalid UTF-8: {}", e)))?;

    parse_identify_output(&json_str)
}

/// Parse the JSON document printed by `mkvmerge --identify -F json`.
pub fn parse_identify_output(json: &str) -> Result<Vec<Track>> {
    let info: IdentifyOutput = serde_json::from_str(json)
        .map_err(|e| Error::parse_error("mkvmerge", e.to_string()))?;

    Ok(info
        .tracks
        .into_iter()
        .map(|t| Track {
            id: t.id,
            kind: TrackType::from(t.kind),
            codec: t.codec,
            language: t.properties.language.unwrap_or_default(),
        })
        .collect())
}
