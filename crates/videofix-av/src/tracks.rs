//! Track classification: filtering, language resolution and prune checks.

use crate::probe::{Track, TrackType};
use crate::{Error, Result};
use std::fmt;

/// Language code used when a track carries no language.
pub const UNDETERMINED: &str = "und";

/// Default-track flag written for an output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Players should pick this stream.
    Default,
    /// Explicitly clear the default flag.
    NotDefault,
}

impl Disposition {
    /// Value passed to ffmpeg's `-disposition` option.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Default => "default",
            Disposition::NotDefault => "-default",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of a track, or `"und"` when it has none.
pub fn resolve_language(track: &Track) -> &str {
    if track.language.is_empty() {
        UNDETERMINED
    } else {
        &track.language
    }
}

/// Resolved language and disposition of a track.
///
/// A track is marked default only when its resolved language equals
/// `default_language`. An empty `default_language` therefore never marks
/// anything default.
pub fn language_and_disposition(track: &Track, default_language: &str) -> (String, Disposition) {
    let lang = resolve_language(track);
    let disposition = if lang == default_language {
        Disposition::Default
    } else {
        Disposition::NotDefault
    };
    (lang.to_string(), disposition)
}

/// Whether pruning drops this track: its resolved language is neither the
/// default language nor `"und"`.
pub fn would_prune(track: &Track, default_language: &str) -> bool {
    let lang = resolve_language(track);
    lang != default_language && lang != UNDETERMINED
}

/// Select the tracks matching every supplied criterion.
///
/// `None` matches anything. The language criterion is compared against the
/// resolved language, so `Some("und")` selects tracks without a language.
/// Order is preserved.
pub fn filter_tracks<'a>(
    tracks: &'a [Track],
    kind: Option<&TrackType>,
    codec: Option<&str>,
    language: Option<&str>,
) -> Vec<&'a Track> {
    tracks
        .iter()
        .filter(|t| kind.map_or(true, |k| &t.kind == k))
        .filter(|t| codec.map_or(true, |c| t.codec == c))
        .filter(|t| language.map_or(true, |l| resolve_language(t) == l))
        .collect()
}

/// Make sure pruning keeps at least one track of every type present.
///
/// # Errors
///
/// Returns [`Error::PruneWouldRemoveAll`] naming the first type (in order of
/// appearance) that would lose all of its tracks.
pub fn check_prune_safety(tracks: &[Track], default_language: &str) -> Result<()> {
    let mut kinds: Vec<&TrackType> = Vec::new();
    for track in tracks {
        if !kinds.contains(&&track.kind) {
            kinds.push(&track.kind);
        }
    }

    for kind in kinds {
        let survives = tracks
            .iter()
            .any(|t| &t.kind == kind && !would_prune(t, default_language));
        if !survives {
            return Err(Error::PruneWouldRemoveAll { kind: kind.clone() });
        }
    }

    Ok(())
}
