//! ffmpeg command construction.
//!
//! The argument vector is built in fixed phases: preamble, audio, subtitles,
//! epilogue. ffmpeg numbers output streams in the order they are mapped, so
//! video always comes first, then audio, then subtitles.
//!
//! `-map` always references the *source* track ID, while per-stream options
//! (`-c:a:N`, `-b:a:N`, `-disposition:s:N`, ...) reference the *output* slot
//! within their type. A slot is only consumed by a track that is emitted.

use crate::probe::{Track, TrackType};
use crate::tracks::{filter_tracks, language_and_disposition, would_prune, UNDETERMINED};
use std::path::Path;

/// Program name placed at the start of the argument vector.
pub const TRANSCODER: &str = "ffmpeg";

/// Audio codec that gets converted.
pub const EAC3_CODEC: &str = "E-AC-3";

/// Codec of the converted tracks, as mkvmerge reports it.
pub const AAC_CODEC: &str = "AAC";

/// Bitrate of the converted tracks.
pub const AAC_BITRATE: &str = "256k";

/// Build the complete ffmpeg invocation for `input`.
///
/// - E-AC-3 audio is transcoded to AAC, unless the file already has an AAC
///   track in the same (known) language.
/// - Other audio and all subtitles are copied.
/// - Tracks in `default_language` get the default disposition, all others
///   have it cleared.
/// - With `prune`, audio and subtitle tracks in languages other than
///   `default_language` or `"und"` are dropped. Pruning needs a default
///   language; with an empty one nothing is dropped.
///
/// The redundancy check for E-AC-3 tracks looks at the full track list, not
/// at what survives pruning.
pub fn build_transcode_args(
    input: &Path,
    output: &Path,
    tracks: &[Track],
    prune: bool,
    default_language: &str,
) -> Vec<String> {
    let prune = prune && !default_language.is_empty();

    let mut args: Vec<String> = vec![
        TRANSCODER.into(),
        "-loglevel".into(),
        "error".into(),
        "-stats".into(),
        "-i".into(),
        input.to_string_lossy().into_owned(),
        "-c:v".into(),
        "copy".into(),
        "-map".into(),
        "0:v".into(),
        "-map_chapters".into(),
        "0".into(),
        "-map_metadata".into(),
        "0".into(),
    ];

    push_audio_args(&mut args, tracks, prune, default_language);
    push_subtitle_args(&mut args, tracks, prune, default_language);

    args.extend([
        String::from("-max_interleave_delta"),
        "0".into(),
        "-y".into(),
        "-f".into(),
        "matroska".into(),
        output.to_string_lossy().into_owned(),
    ]);

    args
}

fn push_audio_args(args: &mut Vec<String>, tracks: &[Track], prune: bool, default_language: &str) {
    let mut slot = 0usize;

    for track in tracks.iter().filter(|t| t.kind == TrackType::Audio) {
        let (lang, disposition) = language_and_disposition(track, default_language);

        if prune && would_prune(track, default_language) {
            #[cfg(feature = "tracing")]
            tracing::info!(
                "Skipping audio track {} ({}): language '{}' is pruned",
                track.id,
                track.codec,
                lang
            );
            continue;
        }

        if track.codec == EAC3_CODEC {
            if lang != UNDETERMINED && has_aac_equivalent(tracks, &lang) {
                #[cfg(feature = "tracing")]
                tracing::info!(
                    "Skipping audio track {} ({}): an {} track in '{}' already exists",
                    track.id,
                    track.codec,
                    AAC_CODEC,
                    lang
                );
                continue;
            }

            #[cfg(feature = "tracing")]
            tracing::info!(
                "Transcoding audio track {} ({}) to {} as output audio {}",
                track.id,
                track.codec,
                AAC_CODEC,
                slot
            );
            args.extend([
                format!("-c:a:{slot}"),
                "aac".into(),
                format!("-b:a:{slot}"),
                AAC_BITRATE.into(),
                format!("-metadata:s:a:{slot}"),
                format!("title=AAC Audio ({lang})"),
            ]);
        } else {
            args.extend([format!("-c:a:{slot}"), "copy".into()]);
        }

        args.extend([
            String::from("-map"),
            format!("0:{}", track.id),
            format!("-disposition:a:{slot}"),
            disposition.to_string(),
        ]);
        slot += 1;
    }
}

fn push_subtitle_args(
    args: &mut Vec<String>,
    tracks: &[Track],
    prune: bool,
    default_language: &str,
) {
    let mut slot = 0usize;

    for track in tracks.iter().filter(|t| t.kind == TrackType::Subtitle) {
        if prune && would_prune(track, default_language) {
            #[cfg(feature = "tracing")]
            tracing::info!(
                "Skipping subtitle track {} ({}): language '{}' is pruned",
                track.id,
                track.codec,
                crate::tracks::resolve_language(track)
            );
            continue;
        }

        let (_, disposition) = language_and_disposition(track, default_language);
        args.extend([
            String::from("-map"),
            format!("0:{}", track.id),
            format!("-c:s:{slot}"),
            "copy".into(),
            format!("-disposition:s:{slot}"),
            disposition.to_string(),
        ]);
        slot += 1;
    }
}

/// Whether the source already carries an AAC audio track in `lang`.
fn has_aac_equivalent(tracks: &[Track], lang: &str) -> bool {
    !filter_tracks(tracks, Some(&TrackType::Audio), Some(AAC_CODEC), Some(lang)).is_empty()
}

/// Whether running the transcoder would change anything.
///
/// True when the file has E-AC-3 audio, or when pruning is enabled and at
/// least one audio or subtitle track would be dropped.
pub fn needs_processing(tracks: &[Track], prune: bool, default_language: &str) -> bool {
    if !filter_tracks(tracks, Some(&TrackType::Audio), Some(EAC3_CODEC), None).is_empty() {
        return true;
    }

    prune
        && !default_language.is_empty()
        && tracks.iter().any(|t| {
            matches!(t.kind, TrackType::Audio | TrackType::Subtitle)
                && would_prune(t, default_language)
        })
}

/// Render an argument vector for logs, one single-quoted word per argument.
pub fn quote_args(args: &[String]) -> String {
    args.iter()
        .map(|a| format!("'{a}'"))
        .collect::<Vec<_>>()
        .join(" ")
}
