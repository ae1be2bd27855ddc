//! Outcome and action types produced by the interpreter

use serde::{Deserialize, Serialize};

/// What to dial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum DialTarget {
    /// A digit-only phone number
    Number(String),
    /// A contact name that still has to be looked up
    Contact(String),
}

/// Something the launcher can open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Resource {
    /// A URI, with an optional URI to try if the first one can't be opened
    Url {
        primary: String,
        fallback: Option<String>,
    },
    /// The system settings screen
    Settings,
}

impl Resource {
    /// Short human name used in failure messages
    pub fn label(&self) -> &str {
        match self {
            Resource::Url { primary, .. } => primary,
            Resource::Settings => "settings",
        }
    }
}

/// Side effect requested by a matched rule
///
/// Fire-and-forget: there is no retry or confirmation state attached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "target")]
pub enum Action {
    #[default]
    None,
    Dial(DialTarget),
    Open(Resource),
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::None => write!(f, "none"),
            Action::Dial(DialTarget::Number(number)) => write!(f, "dial {}", number),
            Action::Dial(DialTarget::Contact(name)) => write!(f, "dial contact \"{}\"", name),
            Action::Open(Resource::Url { primary, fallback }) => match fallback {
                Some(fallback) => write!(f, "open {} (fallback {})", primary, fallback),
                None => write!(f, "open {}", primary),
            },
            Action::Open(Resource::Settings) => write!(f, "open settings"),
        }
    }
}

/// Response text plus at most one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub response: String,
    #[serde(default)]
    pub action: Action,
}

impl Outcome {
    /// A response with no side effect
    pub fn reply(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            action: Action::None,
        }
    }

    pub fn with_action(response: impl Into<String>, action: Action) -> Self {
        Self {
            response: response.into(),
            action,
        }
    }
}

/// A contact directory entry. Numbers are in preference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub numbers: Vec<String>,
}

impl From<&crate::config::ContactConfig> for Contact {
    fn from(config: &crate::config::ContactConfig) -> Self {
        Self {
            name: config.name.clone(),
            numbers: config.numbers.clone(),
        }
    }
}
