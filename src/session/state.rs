//! Session flags and results

use crate::interpreter::Outcome;

/// The three UI flags of the assistant. At most one cycle is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Waiting for an utterance
    pub listening: bool,
    /// Playing back a reply
    pub speaking: bool,
    /// Interpreting and carrying out an action
    pub loading: bool,
}

impl SessionState {
    /// Returns true if any cycle step is in progress
    pub fn is_busy(&self) -> bool {
        self.listening || self.speaking || self.loading
    }

    pub fn is_idle(&self) -> bool {
        !self.is_busy()
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.listening {
            write!(f, "Listening")
        } else if self.loading {
            write!(f, "Loading")
        } else if self.speaking {
            write!(f, "Speaking")
        } else {
            write!(f, "Idle")
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Assistant is busy ({0})")]
    Busy(SessionState),
}

/// One completed listen/interpret/act/speak cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub utterance: String,
    /// Final reply and the requested action. The reply is replaced by a
    /// failure message when the action could not be carried out.
    pub outcome: Outcome,
    /// Whether the action was handed to the launcher successfully
    pub performed: bool,
}

/// Result of `listen` or `submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Turn(Turn),
    /// Blank input, nothing was done
    Skipped,
    /// The speech input is exhausted
    Closed,
}
