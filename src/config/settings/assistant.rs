//! Assistant behavior settings

use serde::{Deserialize, Serialize};

/// Target device family. Decides deep links and whether settings can be launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevicePlatform {
    #[default]
    Android,
    Ios,
}

impl DevicePlatform {
    /// Deep link that opens the YouTube app
    pub fn youtube_deep_link(&self) -> &'static str {
        match self {
            DevicePlatform::Android => "vnd.youtube://",
            DevicePlatform::Ios => "youtube://",
        }
    }

    /// Whether the system settings screen can be opened programmatically
    pub fn can_open_settings(&self) -> bool {
        matches!(self, DevicePlatform::Android)
    }
}

impl std::fmt::Display for DevicePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DevicePlatform::Android => write!(f, "Android"),
            DevicePlatform::Ios => write!(f, "iOS"),
        }
    }
}

/// Assistant settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Name the assistant answers to ("hi <name>" is a greeting)
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub platform: DevicePlatform,

    /// Resolve "call <name>" through the contact directory.
    /// When false, the assistant asks for a number instead.
    #[serde(default = "default_contacts_enabled")]
    pub contacts_enabled: bool,

    /// Enable the "open <app>" command
    #[serde(default = "default_open_apps")]
    pub open_apps: bool,

    /// Minimum digits for a "call" target to count as a phone number
    #[serde(default = "default_min_phone_digits")]
    pub min_phone_digits: usize,

    /// Reply used when nothing matches
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_name() -> String {
    "Doro".to_string()
}

fn default_contacts_enabled() -> bool {
    false
}

fn default_open_apps() -> bool {
    true
}

fn default_min_phone_digits() -> usize {
    7
}

fn default_fallback() -> String {
    crate::interpreter::responses::FALLBACK.to_string()
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            platform: DevicePlatform::default(),
            contacts_enabled: default_contacts_enabled(),
            open_apps: default_open_apps(),
            min_phone_digits: default_min_phone_digits(),
            fallback: default_fallback(),
        }
    }
}
