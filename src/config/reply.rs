//! Custom canned replies

use serde::{Deserialize, Serialize};

/// A user-defined reply, checked after the built-in commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyConfig {
    /// Phrases that trigger the reply (case-insensitive containment)
    pub triggers: Vec<String>,

    /// What the assistant says back
    pub response: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}
