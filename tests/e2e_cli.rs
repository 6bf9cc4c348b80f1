//! CLI end-to-end tests
//!
//! Tests for the videofix command-line interface.

mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the videofix binary
#[allow(deprecated)]
fn videofix_cmd() -> Command {
    let mut cmd = Command::cargo_bin("videofix").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_no_args_shows_usage() {
    let mut cmd = videofix_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = videofix_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("videofix"))
        .stdout(predicate::str::contains("--prune"))
        .stdout(predicate::str::contains("--lang"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = videofix_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("videofix"));
}

#[test]
fn test_cli_check_tools() {
    let mut cmd = videofix_cmd();
    cmd.arg("--check-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("mkvmerge"))
        .stdout(predicate::str::contains("ffmpeg"));
}

#[test]
fn test_cli_prune_requires_language() {
    let mut cmd = videofix_cmd();
    cmd.args(["--prune", "/nonexistent/path/movie.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--prune requires a default language"));
}

#[test]
fn test_cli_invalid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(&config_file, "[defaults\n").unwrap();

    let mut cmd = videofix_cmd();
    cmd.args(["--config", config_file.to_str().unwrap(), "movie.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[cfg(unix)]
mod with_fake_tools {
    use super::common::{media_file, FakeTools, FfmpegBehavior, EAC3_RELEASE};
    use super::*;

    fn write_config(fake: &FakeTools, extra: &str) -> std::path::PathBuf {
        let path = fake.dir.path().join("videofix.toml");
        fs::write(&path, fake.config_toml(extra)).unwrap();
        path
    }

    #[test]
    fn test_cli_missing_file_does_not_abort() {
        let fake = FakeTools::new(EAC3_RELEASE, FfmpegBehavior::Succeed);
        let config = write_config(&fake, "");
        let media = tempdir().unwrap();
        let input = media_file(media.path(), "movie.mkv");

        let mut cmd = videofix_cmd();
        cmd.args([
            "--config",
            config.to_str().unwrap(),
            "/nonexistent/path/movie.mkv",
            input.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("file not found"))
        .stderr(predicate::str::contains("Operation successful"));

        assert_eq!(fs::read_to_string(&input).unwrap().trim(), "transcoded");
    }

    #[test]
    fn test_cli_dry_run_prints_command() {
        let fake = FakeTools::new(EAC3_RELEASE, FfmpegBehavior::Succeed);
        let config = write_config(&fake, "[defaults]\nlanguage = \"eng\"\n");
        let media = tempdir().unwrap();
        let input = media_file(media.path(), "movie.mkv");

        let mut cmd = videofix_cmd();
        cmd.args([
            "--config",
            config.to_str().unwrap(),
            "--dry-run",
            "--prune",
            input.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("'ffmpeg'"))
        .stdout(predicate::str::contains("'title=AAC Audio (eng)'"))
        .stdout(predicate::str::contains("'0:2'").not());

        assert_eq!(fs::read_to_string(&input).unwrap(), "original");
    }

    #[test]
    fn test_cli_lang_flag_overrides_config() {
        let fake = FakeTools::new(EAC3_RELEASE, FfmpegBehavior::Succeed);
        let config = write_config(&fake, "[defaults]\nlanguage = \"eng\"\n");
        let media = tempdir().unwrap();
        let input = media_file(media.path(), "movie.mkv");

        let mut cmd = videofix_cmd();
        cmd.args([
            "--config",
            config.to_str().unwrap(),
            "--lang",
            "spa",
            "--dry-run",
            input.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("'-disposition:a:0' '-default'"))
        .stdout(predicate::str::contains("'-disposition:a:1' 'default'"));
    }
}
