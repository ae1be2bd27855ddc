//! RuleSet - ordered registry of command rules
//!
//! Rules are checked in order and the first one whose trigger appears in the
//! utterance wins. There is no weighting between overlapping rules.

use super::rule::{CommandKind, CommandRule, TriggerMatch};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct RuleSet {
    pub rules: Vec<CommandRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin("Doro", true)
    }
}

impl RuleSet {
    /// The built-in commands in priority order
    pub fn builtin(assistant_name: &str, open_apps: bool) -> Self {
        Self {
            rules: vec![
                CommandRule::new(CommandKind::Greeting, "hello")
                    .with_trigger(format!("hi {}", assistant_name.to_lowercase())),
                CommandRule::new(CommandKind::Call, "call"),
                CommandRule::new(CommandKind::Open, "open").enabled(open_apps),
                CommandRule::new(CommandKind::Time, "what is the time")
                    .with_trigger("what time is it")
                    .with_trigger("what's the time"),
                CommandRule::new(CommandKind::Date, "what is the date")
                    .with_trigger("what's the date")
                    .with_trigger("what day is it"),
                CommandRule::new(CommandKind::Thanks, "thank you").with_trigger("thanks"),
                CommandRule::new(CommandKind::Goodbye, "goodbye").with_trigger("bye"),
                CommandRule::new(CommandKind::Help, "what can you do").with_trigger("help"),
            ],
        }
    }

    /// Built-in commands followed by the custom replies from config, in file order
    pub fn from_config(config: &Config) -> Self {
        let mut rules = Self::builtin(&config.assistant.name, config.assistant.open_apps);

        for reply in &config.reply {
            let triggers: Vec<String> = reply
                .triggers
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();

            if triggers.is_empty() {
                tracing::warn!("Skipping reply without triggers: {:?}", reply.response);
                continue;
            }

            rules.add_rule(CommandRule {
                kind: CommandKind::Reply(reply.response.clone()),
                triggers,
                enabled: reply.enabled,
            });
        }

        rules
    }

    /// Append a rule; it is checked after every existing rule
    pub fn add_rule(&mut self, rule: CommandRule) {
        self.rules.push(rule);
    }

    /// Match text against all rules, first match wins
    pub fn match_text(&self, text: &str) -> Option<TriggerMatch> {
        self.rules.iter().find_map(|rule| rule.matches(text))
    }

    /// Enabled rules in priority order
    pub fn active(&self) -> impl Iterator<Item = &CommandRule> {
        self.rules.iter().filter(|r| r.enabled)
    }

    /// Get all trigger phrases of enabled rules for display
    pub fn all_triggers(&self) -> Vec<String> {
        self.active().flat_map(|r| r.triggers.clone()).collect()
    }
}
