//! CommandRule and TriggerMatch types
//!
//! This module defines a single keyword rule and the containment matching logic.

use serde::{Deserialize, Serialize};

/// Behavior selected when a rule matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Greeting,
    /// Dial a number or a contact named after the trigger
    Call,
    /// Launch an app named after the trigger
    Open,
    Time,
    Date,
    Thanks,
    Goodbye,
    Help,
    /// User-defined canned reply
    Reply(String),
}

impl CommandKind {
    /// Whether the rule needs the text that follows its trigger
    pub fn takes_argument(&self) -> bool {
        matches!(self, CommandKind::Call | CommandKind::Open)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandKind::Greeting => write!(f, "greeting"),
            CommandKind::Call => write!(f, "call"),
            CommandKind::Open => write!(f, "open"),
            CommandKind::Time => write!(f, "time"),
            CommandKind::Date => write!(f, "date"),
            CommandKind::Thanks => write!(f, "thanks"),
            CommandKind::Goodbye => write!(f, "goodbye"),
            CommandKind::Help => write!(f, "help"),
            CommandKind::Reply(_) => write!(f, "reply"),
        }
    }
}

/// A keyword rule: trigger phrases plus the behavior they select
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRule {
    pub kind: CommandKind,

    /// Phrases that trigger this rule (case-insensitive, matched anywhere in the utterance)
    pub triggers: Vec<String>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl CommandRule {
    pub fn new(kind: CommandKind, trigger: impl Into<String>) -> Self {
        Self {
            kind,
            triggers: vec![trigger.into()],
            enabled: true,
        }
    }

    /// Add an additional trigger phrase
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.triggers.push(trigger.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check if the utterance contains any of this rule's triggers
    pub fn matches(&self, text: &str) -> Option<TriggerMatch> {
        if !self.enabled {
            return None;
        }

        let text_lower = text.to_lowercase();

        for trigger in &self.triggers {
            let trigger_lower = trigger.to_lowercase();
            if trigger_lower.is_empty() || !text_lower.contains(&trigger_lower) {
                continue;
            }

            let argument = if self.kind.takes_argument() {
                capture_after(text, trigger)
            } else {
                None
            };

            return Some(TriggerMatch {
                kind: self.kind.clone(),
                trigger: trigger.clone(),
                argument,
            });
        }

        None
    }
}

/// Capture the rest of the utterance after `<trigger> `, keeping its original case.
///
/// Trailing sentence punctuation added by recognizers is dropped.
fn capture_after(text: &str, trigger: &str) -> Option<String> {
    // Lowercase char by char, remembering where each original char starts in the
    // lowercased text. Some chars grow when lowercased ('İ' -> "i̇").
    let mut text_lower = String::with_capacity(text.len());
    let mut starts: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (idx, c) in text.char_indices() {
        starts.push((text_lower.len(), idx));
        text_lower.extend(c.to_lowercase());
    }
    let trigger_lower = trigger.to_lowercase();

    for (start, matched) in text_lower.match_indices(&trigger_lower) {
        let end = start + matched.len();
        let rest_start_byte = if end == text_lower.len() {
            text.len()
        } else {
            match starts.iter().find(|(lower, _)| *lower == end) {
                Some((_, original)) => *original,
                None => continue,
            }
        };
        let rest = &text[rest_start_byte..];

        // The trigger must be followed by whitespace, then the argument
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }

        let rest = rest
            .trim()
            .trim_end_matches(|c: char| matches!(c, '.' | ',' | '!' | '?'))
            .trim_end();
        if !rest.is_empty() {
            return Some(rest.to_string());
        }
    }

    None
}

/// Result of a rule match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch {
    pub kind: CommandKind,
    /// The trigger phrase that was found
    pub trigger: String,
    /// Text after the trigger, for rules that take an argument
    pub argument: Option<String>,
}
