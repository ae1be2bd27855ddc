//! Command interpreter
//!
//! Turns one utterance into a reply and at most one action. The interpreter
//! performs no I/O and keeps no state between calls: the same utterance at
//! the same time always yields the same outcome. Carrying out the action
//! (dialing, opening, looking up contacts, speaking) is the caller's job,
//! see [`crate::session`].
//!
//! Example:
//! - "Hi Doro" -> greeting, no action
//! - "call 555-123-4567" -> `Dial(Number("5551234567"))`
//! - "open YouTube" -> `Open(Url { primary: "vnd.youtube://", fallback: web })`

mod outcome;
pub mod phone;
mod registry;
pub mod responses;
mod rule;

pub use outcome::{Action, Contact, DialTarget, Outcome, Resource};
pub use registry::RuleSet;
pub use rule::{CommandKind, CommandRule, TriggerMatch};

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::config::{Config, DevicePlatform};

/// Stateless utterance interpreter
#[derive(Debug, Clone)]
pub struct Interpreter {
    rules: RuleSet,
    assistant_name: String,
    platform: DevicePlatform,
    contacts_enabled: bool,
    min_phone_digits: usize,
    fallback: String,
    youtube_web: String,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Interpreter {
    pub fn from_config(config: &Config) -> Self {
        Self {
            rules: RuleSet::from_config(config),
            assistant_name: config.assistant.name.clone(),
            platform: config.assistant.platform,
            contacts_enabled: config.assistant.contacts_enabled,
            min_phone_digits: config.assistant.min_phone_digits,
            fallback: config.assistant.fallback.clone(),
            youtube_web: config.launcher.youtube_web.clone(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn contacts_enabled(&self) -> bool {
        self.contacts_enabled
    }

    /// Interpret an utterance using the current local time
    pub fn interpret(&self, utterance: &str) -> Outcome {
        self.interpret_at(utterance, Local::now().naive_local())
    }

    /// Interpret an utterance as if it were spoken at `now`
    pub fn interpret_at(&self, utterance: &str, now: NaiveDateTime) -> Outcome {
        let Some(m) = self.rules.match_text(utterance) else {
            debug!("No rule matched {:?}", utterance);
            return Outcome::reply(self.fallback.clone());
        };

        debug!("Matched {} rule via {:?}", m.kind, m.trigger);

        match m.kind {
            CommandKind::Greeting => Outcome::reply(responses::greeting(&self.assistant_name)),
            CommandKind::Call => self.call(m.argument.as_deref()),
            CommandKind::Open => self.open(m.argument.as_deref()),
            CommandKind::Time => Outcome::reply(responses::time(now)),
            CommandKind::Date => Outcome::reply(responses::date(now)),
            CommandKind::Thanks => Outcome::reply(responses::THANKS),
            CommandKind::Goodbye => Outcome::reply(responses::GOODBYE),
            CommandKind::Help => Outcome::reply(responses::help(&self.assistant_name)),
            CommandKind::Reply(response) => Outcome::reply(response),
        }
    }

    fn call(&self, target: Option<&str>) -> Outcome {
        let Some(target) = target else {
            return Outcome::reply(responses::ASK_WHO_TO_CALL);
        };

        match phone::classify(target, self.min_phone_digits) {
            DialTarget::Number(number) => Outcome::with_action(
                responses::calling(&number),
                Action::Dial(DialTarget::Number(number)),
            ),
            DialTarget::Contact(name) if self.contacts_enabled => Outcome::with_action(
                responses::looking_up(&name),
                Action::Dial(DialTarget::Contact(name)),
            ),
            DialTarget::Contact(name) => Outcome::reply(responses::contacts_unavailable(&name)),
        }
    }

    fn open(&self, app: Option<&str>) -> Outcome {
        let Some(app) = app else {
            return Outcome::reply(responses::ASK_WHICH_APP);
        };

        let app_lower = app.to_lowercase();
        if app_lower.contains("youtube") {
            Outcome::with_action(
                responses::OPENING_YOUTUBE,
                Action::Open(Resource::Url {
                    primary: self.platform.youtube_deep_link().to_string(),
                    fallback: Some(self.youtube_web.clone()),
                }),
            )
        } else if app_lower.contains("settings") {
            if self.platform.can_open_settings() {
                Outcome::with_action(
                    responses::OPENING_SETTINGS,
                    Action::Open(Resource::Settings),
                )
            } else {
                Outcome::reply(responses::settings_unsupported(self.platform))
            }
        } else {
            Outcome::reply(responses::open_unsupported(app))
        }
    }

    /// Finish a `Dial(Contact)` request once the caller has looked the name up.
    ///
    /// Only the first number of the contact is used.
    pub fn resolve_contact(&self, name: &str, contact: Option<&Contact>) -> Outcome {
        let Some(contact) = contact else {
            return Outcome::reply(responses::contact_not_found(name));
        };

        let number = contact
            .numbers
            .first()
            .map(|n| phone::digits_only(n))
            .filter(|n| !n.is_empty());

        match number {
            Some(number) => Outcome::with_action(
                responses::calling(&contact.name),
                Action::Dial(DialTarget::Number(number)),
            ),
            None => Outcome::reply(responses::contact_without_number(&contact.name)),
        }
    }
}
