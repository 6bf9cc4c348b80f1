//! Per-file workflow: probe, decide, transcode, replace.

use std::path::{Path, PathBuf};
use videofix_av::{
    build_transcode_args, check_prune_safety, needs_processing, probe_tracks, quote_args,
    run_transcoder, Tools, Workspace,
};

/// Options applied to every file of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixOptions {
    /// Language whose tracks become the default ones. Empty disables it.
    pub default_language: String,
    /// Drop audio and subtitle tracks in other languages.
    pub prune: bool,
    /// Only print the command that would run.
    pub dry_run: bool,
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was rewritten in place.
    Fixed,
    /// The file has nothing to convert or prune and was left alone.
    NothingToDo,
    /// Dry run: the ffmpeg command that would have been executed.
    DryRun(Vec<String>),
}

/// Counters for a batch of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub fixed: usize,
    pub unchanged: usize,
    pub failed: usize,
}

/// Fix a single MKV file in place.
///
/// The original is only replaced once ffmpeg has succeeded. On ffmpeg failure
/// the partial output is removed and the original is left untouched.
pub fn process_file(
    path: &Path,
    tools: &Tools,
    options: &FixOptions,
) -> videofix_av::Result<Outcome> {
    let workspace = Workspace::new(path)?;

    let tracks = probe_tracks(&tools.mkvmerge, workspace.input())?;
    tracing::info!("=== List of input tracks ===");
    for track in &tracks {
        tracing::info!(
            "  - ID: {} ({}), Codec: {}, Language: {}",
            track.id,
            track.kind,
            track.codec,
            track.language
        );
    }

    if options.prune {
        check_prune_safety(&tracks, &options.default_language)?;
    }

    if !needs_processing(&tracks, options.prune, &options.default_language) {
        tracing::info!("No E-AC-3 audio tracks and nothing to prune in {:?}", path);
        return Ok(Outcome::NothingToDo);
    }

    let args = build_transcode_args(
        workspace.input(),
        workspace.output(),
        &tracks,
        options.prune,
        &options.default_language,
    );

    if options.dry_run {
        return Ok(Outcome::DryRun(args));
    }

    tracing::info!("Executing command:\n{}", quote_args(&args));

    if let Err(e) = run_transcoder(&tools.ffmpeg, &args) {
        workspace.discard();
        return Err(e);
    }

    workspace.finalize()?;
    Ok(Outcome::Fixed)
}

/// Process every file in order. A failing file is logged and skipped.
pub fn process_files(paths: &[PathBuf], tools: &Tools, options: &FixOptions) -> Summary {
    let mut summary = Summary::default();

    for path in paths {
        println!("{}", format_header(&format!("File: {}", path.display())));

        match process_file(path, tools, options) {
            Ok(Outcome::Fixed) => {
                tracing::info!("{}: Operation successful.", path.display());
                summary.fixed += 1;
            }
            Ok(Outcome::NothingToDo) => {
                tracing::info!("{}: No conversion needed.", path.display());
                summary.unchanged += 1;
            }
            Ok(Outcome::DryRun(args)) => {
                println!("{}", quote_args(&args));
                summary.unchanged += 1;
            }
            Err(e) => {
                tracing::error!("ERROR({}): {}", path.display(), e);
                summary.failed += 1;
            }
        }
    }

    summary
}

/// Frame `text` between two rules of `=` as wide as its longest line.
pub fn format_header(text: &str) -> String {
    let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let rule = "=".repeat(width);
    format!("{rule}\n{text}\n{rule}")
}
