//! Error types for videofix-av.

use crate::probe::TrackType;
use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fixing a media file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is not available.
    #[error("{tool} not found. Please install the {package} package")]
    ToolNotFound { tool: String, package: String },

    /// An external tool failed to execute.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: String, message: String },

    /// Failed to parse tool output.
    #[error("failed to parse {tool} output: {message}")]
    ParseError { tool: String, message: String },

    /// The specified file was not found.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The input file does not carry an `.mkv` extension.
    #[error("not an MKV file: {}", path.display())]
    NotMkv { path: PathBuf },

    /// The temporary output is left over from a crash or owned by another run.
    #[error("output file '{}' already exists. Skipping", path.display())]
    TempOutputExists { path: PathBuf },

    /// Pruning would drop every track of one type.
    #[error("pruning would remove all tracks of type '{kind}'")]
    PruneWouldRemoveAll { kind: TrackType },

    /// The original file vanished while the transcoder was running.
    #[error("original file ({}) no longer exists after transcoding", path.display())]
    OriginalMissing { path: PathBuf },

    /// Workspace error.
    #[error("workspace error: {0}")]
    Workspace(String),

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        let tool = tool.into();
        let package = match tool.as_str() {
            "mkvmerge" => "mkvtoolnix".to_string(),
            other => other.to_string(),
        };
        Self::ToolNotFound { tool, package }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}
