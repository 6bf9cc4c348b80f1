//! Workspace management for a single file fix.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Inserted between the file stem and extension of the temporary output.
pub const OUTPUT_SUFFIX: &str = "_with_aac";

/// Extension appended to the temporary output.
pub const TEMP_EXTENSION: &str = "TMP";

/// Workspace for one input file.
///
/// The transcoder writes to a temporary file next to the input, named
/// deterministically from the input path (`movie.mkv` becomes
/// `movie_with_aac.mkv.TMP`). A leftover temporary file means another run is
/// working on the same input, or a previous one crashed, so creation fails
/// if it already exists.
///
/// # Example
///
/// ```no_run
/// use videofix_av::Workspace;
///
/// let workspace = Workspace::new("/path/to/movie.mkv")?;
/// // Run ffmpeg writing to workspace.output()
/// workspace.finalize()?;
/// # Ok::<(), videofix_av::Error>(())
/// ```
#[derive(Debug)]
pub struct Workspace {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl Workspace {
    /// Validate `input` and reserve its temporary output path.
    ///
    /// # Errors
    ///
    /// - [`Error::FileNotFound`] if `input` does not exist.
    /// - [`Error::NotMkv`] if it does not have an `.mkv` extension.
    /// - [`Error::TempOutputExists`] if the temporary output is already there.
    pub fn new<P: AsRef<Path>>(input: P) -> Result<Self> {
        let input = input.as_ref();

        if !input.exists() {
            return Err(Error::file_not_found(input));
        }

        let output_path = temp_output_path(input)?;
        if output_path.exists() {
            return Err(Error::TempOutputExists { path: output_path });
        }

        Ok(Self {
            input_path: input.to_path_buf(),
            output_path,
        })
    }

    /// Get the input file path.
    pub fn input(&self) -> &Path {
        &self.input_path
    }

    /// Get the output file path.
    pub fn output(&self) -> &Path {
        &self.output_path
    }

    /// Replace the original file with the finished output.
    pub fn finalize(self) -> Result<PathBuf> {
        if !self.output_path.exists() {
            return Err(Error::Workspace(format!(
                "Output file does not exist: {:?}",
                self.output_path
            )));
        }

        if !self.input_path.exists() {
            return Err(Error::OriginalMissing {
                path: self.input_path,
            });
        }

        std::fs::rename(&self.output_path, &self.input_path).map_err(|e| {
            Error::Workspace(format!(
                "failed to move '{}' to '{}': {}",
                self.output_path.display(),
                self.input_path.display(),
                e
            ))
        })?;

        Ok(self.input_path)
    }

    /// Remove whatever the transcoder left behind, keeping the original.
    pub fn discard(self) {
        if self.output_path.exists() {
            if let Err(_e) = std::fs::remove_file(&self.output_path) {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Failed to remove partial output {:?}: {}",
                    self.output_path,
                    _e
                );
            }
        }
    }
}

/// Temporary output path for `input`.
///
/// # Errors
///
/// Returns [`Error::NotMkv`] unless the extension is `mkv` (any case).
pub fn temp_output_path(input: &Path) -> Result<PathBuf> {
    let extension = input
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if extension != "mkv" {
        return Err(Error::NotMkv {
            path: input.to_path_buf(),
        });
    }

    let stem = input
        .file_stem()
        .ok_or_else(|| Error::InvalidInput("Invalid input file path".to_string()))?
        .to_string_lossy();
    let dir = input.parent().unwrap_or_else(|| Path::new(""));

    Ok(dir.join(format!(
        "{stem}{OUTPUT_SUFFIX}.{extension}.{TEMP_EXTENSION}"
    )))
}
