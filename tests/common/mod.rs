//! Shared helpers for integration tests.
//!
//! [`FakeTools`] writes stand-in `mkvmerge` and `ffmpeg` shell scripts into a
//! temporary directory so the whole workflow can run without the real tools.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use videofix_av::Tools;

/// How the fake ffmpeg behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfmpegBehavior {
    /// Write "transcoded" to the output path and exit 0.
    Succeed,
    /// Write a partial output and exit 1.
    Fail,
}

/// Stand-in tool scripts living in a temporary directory.
pub struct FakeTools {
    pub dir: TempDir,
    pub tools: Tools,
}

impl FakeTools {
    /// `identify_json` is printed by the fake `mkvmerge --identify`.
    pub fn new(identify_json: &str, ffmpeg: FfmpegBehavior) -> Self {
        let dir = tempfile::tempdir().unwrap();

        let mkvmerge = dir.path().join("mkvmerge");
        write_script(
            &mkvmerge,
            &format!("#!/bin/sh\ncat <<'JSON'\n{identify_json}\nJSON\n"),
        );

        let ffmpeg_path = dir.path().join("ffmpeg");
        let args_log = dir.path().join("ffmpeg.args");
        let body = match ffmpeg {
            FfmpegBehavior::Succeed => "echo transcoded > \"$last\"\nexit 0",
            FfmpegBehavior::Fail => "echo partial > \"$last\"\nexit 1",
        };
        write_script(
            &ffmpeg_path,
            &format!(
                "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nfor last; do :; done\n{body}\n",
                args_log.display()
            ),
        );

        Self {
            tools: Tools {
                mkvmerge,
                ffmpeg: ffmpeg_path,
            },
            dir,
        }
    }

    /// Arguments the fake ffmpeg was last called with, one per line.
    pub fn ffmpeg_args(&self) -> Option<Vec<String>> {
        fs::read_to_string(self.dir.path().join("ffmpeg.args"))
            .ok()
            .map(|s| s.lines().map(str::to_string).collect())
    }

    /// TOML config pointing at the fake tools.
    pub fn config_toml(&self, extra: &str) -> String {
        format!(
            "{extra}\n[tools]\nffmpeg_path = \"{}\"\nmkvmerge_path = \"{}\"\n",
            self.tools.ffmpeg.display(),
            self.tools.mkvmerge.display()
        )
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Create `name` inside `dir` with some placeholder content.
pub fn media_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"original").unwrap();
    path
}

/// Identify output for a typical release: video, English and Spanish E-AC-3
/// audio, English and French subtitles.
pub const EAC3_RELEASE: &str = r#"{
  "container": {"type": "Matroska", "recognized": true, "supported": true},
  "tracks": [
    {"id": 0, "type": "video", "codec": "HEVC/H.265/MPEG-H", "properties": {"language": "und"}},
    {"id": 1, "type": "audio", "codec": "E-AC-3", "properties": {"language": "eng"}},
    {"id": 2, "type": "audio", "codec": "E-AC-3", "properties": {"language": "spa"}},
    {"id": 3, "type": "subtitles", "codec": "SubRip/SRT", "properties": {"language": "eng"}},
    {"id": 4, "type": "subtitles", "codec": "SubRip/SRT", "properties": {"language": "fre"}}
  ]
}"#;

/// Identify output for a file that only has AAC audio.
pub const AAC_ONLY: &str = r#"{
  "tracks": [
    {"id": 0, "type": "video", "codec": "AVC/H.264/MPEG-4p10", "properties": {}},
    {"id": 1, "type": "audio", "codec": "AAC", "properties": {"language": "eng"}}
  ]
}"#;

/// Identify output whose only audio track is Spanish.
pub const SPANISH_AUDIO: &str = r#"{
  "tracks": [
    {"id": 0, "type": "video", "codec": "AVC/H.264/MPEG-4p10", "properties": {"language": "und"}},
    {"id": 1, "type": "audio", "codec": "E-AC-3", "properties": {"language": "spa"}}
  ]
}"#;
