//! Assistant session
//!
//! Drives one listen -> interpret -> act -> speak cycle at a time against the
//! platform collaborators, and owns the listening/speaking/loading flags the
//! interpreter never sees. Collaborator failures never end the session: they
//! replace the reply with a failure message and the session goes back to idle.

mod state;

pub use state::{SessionError, SessionState, Step, Turn};

use tracing::{debug, info, warn};

use crate::interpreter::{responses, Action, DialTarget, Interpreter, Outcome};
use crate::platform::{ContactDirectory, Launcher, SpeechInput, SpeechOutput};

pub struct Session {
    interpreter: Interpreter,
    input: Box<dyn SpeechInput>,
    output: Box<dyn SpeechOutput>,
    launcher: Box<dyn Launcher>,
    contacts: Option<Box<dyn ContactDirectory>>,
    state: SessionState,
}

impl Session {
    pub fn new(
        interpreter: Interpreter,
        input: Box<dyn SpeechInput>,
        output: Box<dyn SpeechOutput>,
        launcher: Box<dyn Launcher>,
    ) -> Self {
        Self {
            interpreter,
            input,
            output,
            launcher,
            contacts: None,
            state: SessionState::default(),
        }
    }

    /// Attach a contact directory for "call <name>"
    pub fn with_contacts(mut self, contacts: Box<dyn ContactDirectory>) -> Self {
        self.contacts = Some(contacts);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.state.is_busy() {
            return Err(SessionError::Busy(self.state));
        }
        Ok(())
    }

    /// Wait for the next utterance and handle it
    pub async fn listen(&mut self) -> Result<Step, SessionError> {
        self.ensure_idle()?;

        self.state.listening = true;
        let heard = self.input.next_utterance().await;
        self.state.listening = false;

        match heard {
            Ok(Some(text)) => self.submit(&text).await,
            Ok(None) => Ok(Step::Closed),
            Err(e) => {
                warn!("Recognition failed: {}", e);
                let outcome = Outcome::reply(responses::LISTEN_FAILED);
                self.say(&outcome.response).await;
                Ok(Step::Turn(Turn {
                    utterance: String::new(),
                    outcome,
                    performed: false,
                }))
            }
        }
    }

    /// Handle typed or already transcribed text
    pub async fn submit(&mut self, text: &str) -> Result<Step, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Step::Skipped);
        }
        self.ensure_idle()?;

        self.state.loading = true;
        let mut outcome = self.interpreter.interpret(text);
        if let Action::Dial(DialTarget::Contact(name)) = outcome.action.clone() {
            outcome = self.resolve_contact(&name).await;
        }
        let performed = self.perform(&mut outcome).await;
        self.state.loading = false;

        info!(utterance = text, action = %outcome.action, performed, "Handled utterance");
        self.say(&outcome.response).await;

        Ok(Step::Turn(Turn {
            utterance: text.to_string(),
            outcome,
            performed,
        }))
    }

    /// Cancel listening and playback, and return to idle
    pub fn stop(&mut self) {
        if self.state.listening {
            self.input.cancel();
        }
        if self.state.speaking {
            self.output.stop();
        }
        self.state = SessionState::default();
    }

    async fn resolve_contact(&self, name: &str) -> Outcome {
        let Some(contacts) = &self.contacts else {
            return Outcome::reply(responses::contacts_unavailable(name));
        };

        match contacts.find(name).await {
            Ok(contact) => self.interpreter.resolve_contact(name, contact.as_ref()),
            Err(e) => {
                warn!("Contact lookup for {:?} failed: {}", name, e);
                Outcome::reply(responses::CONTACTS_FAILED)
            }
        }
    }

    /// Carry out the action. On failure the reply is replaced.
    async fn perform(&self, outcome: &mut Outcome) -> bool {
        match &outcome.action {
            Action::None => false,
            Action::Dial(DialTarget::Number(number)) => match self.launcher.dial(number).await {
                Ok(()) => true,
                Err(e) => {
                    warn!("Dialer failed for {}: {}", number, e);
                    outcome.response = responses::DIALER_FAILED.to_string();
                    false
                }
            },
            Action::Dial(DialTarget::Contact(name)) => {
                debug!("Unresolved contact {:?} left undialed", name);
                false
            }
            Action::Open(resource) => match self.launcher.open(resource).await {
                Ok(()) => true,
                Err(e) => {
                    warn!("Failed to open {}: {}", resource.label(), e);
                    outcome.response = responses::open_failed(resource.label());
                    false
                }
            },
        }
    }

    async fn say(&mut self, text: &str) {
        self.state.speaking = true;
        if let Err(e) = self.output.speak(text).await {
            warn!("Speech playback failed: {}", e);
        }
        self.state.speaking = false;
    }
}

#[cfg(test)]
mod tests;
