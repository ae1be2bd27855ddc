//! Reply texts

use chrono::NaiveDateTime;

use crate::config::DevicePlatform;

pub const FALLBACK: &str =
    "I'm not sure how to handle that. Try asking me to call someone, or say hello!";

pub const ASK_WHO_TO_CALL: &str = "Who would you like me to call?";
pub const ASK_WHICH_APP: &str = "Which app would you like me to open?";
pub const OPENING_YOUTUBE: &str = "Opening YouTube...";
pub const OPENING_SETTINGS: &str = "Opening settings...";
pub const THANKS: &str = "You're welcome! Is there anything else I can help with?";
pub const GOODBYE: &str = "Goodbye! Have a great day.";

// Follow-up replies produced by the session when a collaborator fails
pub const DIALER_FAILED: &str = "Sorry, I couldn't open the dialer.";
pub const CONTACTS_FAILED: &str = "Sorry, I couldn't access your contacts.";
pub const LISTEN_FAILED: &str = "Sorry, I didn't catch that. Please try again.";

pub fn greeting(name: &str) -> String {
    format!(
        "Hello! I'm {}, your voice assistant. How can I help you today?",
        name
    )
}

pub fn help(name: &str) -> String {
    format!(
        "I'm {}. I can call a number or a contact, open YouTube or settings, \
         and tell you the time or the date.",
        name
    )
}

pub fn calling(target: &str) -> String {
    format!("Calling {}...", target)
}

pub fn looking_up(name: &str) -> String {
    format!("Looking up {} in your contacts...", name)
}

pub fn contacts_unavailable(name: &str) -> String {
    format!(
        "I can't look up {} without access to your contacts. \
         Please allow contacts access, or tell me the phone number.",
        name
    )
}

pub fn contact_not_found(name: &str) -> String {
    format!("I couldn't find {} in your contacts.", name)
}

pub fn contact_without_number(name: &str) -> String {
    format!("{} doesn't have a phone number.", name)
}

pub fn settings_unsupported(platform: DevicePlatform) -> String {
    format!(
        "I can't open Settings directly on {}. Please open the Settings app from your home screen.",
        platform
    )
}

pub fn open_unsupported(app: &str) -> String {
    format!(
        "I would open {}, but I can only open YouTube and Settings for now.",
        app
    )
}

pub fn open_failed(label: &str) -> String {
    format!("Sorry, I couldn't open {}.", label)
}

pub fn time(now: NaiveDateTime) -> String {
    format!("It's {}.", now.format("%-I:%M %p"))
}

pub fn date(now: NaiveDateTime) -> String {
    format!("Today is {}.", now.format("%A, %B %-d, %Y"))
}
