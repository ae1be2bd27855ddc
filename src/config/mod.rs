//! Configuration loading and management

mod contact;
mod io;
mod reply;
mod settings;

pub use contact::ContactConfig;
pub use reply::ReplyConfig;
pub use settings::{AssistantSettings, DevicePlatform, LauncherSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// How the assistant interprets commands
    #[serde(default)]
    pub assistant: AssistantSettings,

    /// How actions are carried out on this machine
    #[serde(default)]
    pub launcher: LauncherSettings,

    /// Contacts available to "call <name>"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<ContactConfig>,

    /// Custom canned replies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reply: Vec<ReplyConfig>,
}

impl Config {
    /// Create a config with the defaults written by `doro init`.
    pub fn with_defaults() -> Self {
        Self {
            reply: vec![ReplyConfig {
                triggers: vec!["how are you".to_string()],
                response: "I'm doing great, thanks for asking!".to_string(),
                enabled: true,
            }],
            ..Self::default()
        }
    }
}
