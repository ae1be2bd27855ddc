//! External collaborators of the assistant
//!
//! The interpreter never talks to the outside world. The session drives these
//! traits instead:
//! - `SpeechInput`: produces utterances (speech recognition or typed text)
//! - `SpeechOutput`: speaks replies
//! - `ContactDirectory`: resolves contact names to phone numbers
//! - `Launcher`: hands dial and open requests to the OS
//!
//! Console implementations back the `doro chat` command.

mod console;
mod contacts;
mod error;
mod launcher;

pub use console::{ConsoleSpeaker, StdinInput};
pub use contacts::ContactBook;
pub use error::PlatformError;
pub use launcher::SystemLauncher;

use async_trait::async_trait;

use crate::interpreter::{Contact, Resource};

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Source of utterances
#[async_trait]
pub trait SpeechInput: Send {
    /// Wait for the next utterance. `Ok(None)` means the input is exhausted.
    async fn next_utterance(&mut self) -> Result<Option<String>>;

    /// Abort a pending recognition, if any
    fn cancel(&mut self) {}
}

/// Text-to-speech playback
#[async_trait]
pub trait SpeechOutput: Send + Sync {
    /// Speak the text, returning once playback finished
    async fn speak(&self, text: &str) -> Result<()>;

    /// Stop playback in progress
    fn stop(&self) {}
}

/// Contact lookup by name
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    /// First contact matching the name filter, if any
    async fn find(&self, name: &str) -> Result<Option<Contact>>;
}

/// Dialer and app launcher
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Open the dialer with a digit-only number
    async fn dial(&self, number: &str) -> Result<()>;

    /// Open a single URI
    async fn open_uri(&self, uri: &str) -> Result<()>;

    /// Open the system settings screen
    async fn open_settings(&self) -> Result<()>;

    /// Open a resource, trying the fallback URI once if the primary fails
    async fn open(&self, resource: &Resource) -> Result<()> {
        match resource {
            Resource::Settings => self.open_settings().await,
            Resource::Url { primary, fallback } => match self.open_uri(primary).await {
                Ok(()) => Ok(()),
                Err(e) => match fallback {
                    Some(fallback) => {
                        tracing::warn!("Failed to open {}: {}; trying {}", primary, e, fallback);
                        self.open_uri(fallback).await
                    }
                    None => Err(e),
                },
            },
        }
    }
}
