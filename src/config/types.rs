use serde::{Deserialize, Serialize};
pub use videofix_av::ToolsConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Defaults for flags that can also be given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Language whose tracks become the default ones (e.g. "eng").
    /// Empty disables default-track handling.
    #[serde(default)]
    pub language: String,

    /// Drop audio and subtitle tracks in other languages.
    #[serde(default)]
    pub prune: bool,
}
