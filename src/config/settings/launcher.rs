//! Launcher settings for the desktop stand-in of the phone's dialer and app launcher

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// Log actions instead of handing them to the OS
    #[serde(default)]
    pub dry_run: bool,

    /// Command used to open URIs. Empty means the platform default
    /// (`open` on macOS, `xdg-open` on Linux, `cmd /C start` on Windows).
    #[serde(default)]
    pub opener: String,

    /// Web page opened when the YouTube app can't be launched
    #[serde(default = "default_youtube_web")]
    pub youtube_web: String,
}

fn default_youtube_web() -> String {
    "https://www.youtube.com".to_string()
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            dry_run: false,
            opener: String::new(),
            youtube_web: default_youtube_web(),
        }
    }
}
