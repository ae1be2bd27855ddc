//! Session tests with in-memory collaborators

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::*;
use crate::config::Config;
use crate::interpreter::{Contact, Resource};
use crate::platform::{ContactBook, PlatformError, Result};

struct ScriptedInput {
    lines: VecDeque<Result<Option<String>>>,
    cancelled: Arc<AtomicBool>,
}

impl ScriptedInput {
    fn new(lines: Vec<Result<Option<String>>>) -> Self {
        Self {
            lines: lines.into(),
            cancelled: Arc::default(),
        }
    }
}

#[async_trait]
impl SpeechInput for ScriptedInput {
    async fn next_utterance(&mut self) -> Result<Option<String>> {
        self.lines.pop_front().unwrap_or(Ok(None))
    }

    fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
struct RecordingSpeaker {
    spoken: Arc<Mutex<Vec<String>>>,
    stopped: Arc<AtomicBool>,
}

#[async_trait]
impl SpeechOutput for RecordingSpeaker {
    async fn speak(&self, text: &str) -> Result<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}

/// Records launches; URIs listed in `broken` fail, as does the dialer when `dialer_broken`
#[derive(Clone, Default)]
struct FakeLauncher {
    launched: Arc<Mutex<Vec<String>>>,
    broken: Vec<String>,
    dialer_broken: bool,
}

#[async_trait]
impl Launcher for FakeLauncher {
    async fn dial(&self, number: &str) -> Result<()> {
        if self.dialer_broken {
            return Err(PlatformError::PermissionDenied("CALL_PHONE".to_string()));
        }
        self.launched.lock().unwrap().push(format!("tel:{}", number));
        Ok(())
    }

    async fn open_uri(&self, uri: &str) -> Result<()> {
        if self.broken.iter().any(|b| b == uri) {
            return Err(PlatformError::Launch {
                target: uri.to_string(),
                reason: "no handler".to_string(),
            });
        }
        self.launched.lock().unwrap().push(uri.to_string());
        Ok(())
    }

    async fn open_settings(&self) -> Result<()> {
        self.launched.lock().unwrap().push("settings".to_string());
        Ok(())
    }
}

struct FailingDirectory;

#[async_trait]
impl ContactDirectory for FailingDirectory {
    async fn find(&self, _name: &str) -> Result<Option<Contact>> {
        Err(PlatformError::Contacts("permission revoked".to_string()))
    }
}

fn session_with(
    config: &Config,
    input: Vec<Result<Option<String>>>,
    launcher: FakeLauncher,
) -> (Session, RecordingSpeaker) {
    let speaker = RecordingSpeaker::default();
    let session = Session::new(
        Interpreter::from_config(config),
        Box::new(ScriptedInput::new(input)),
        Box::new(speaker.clone()),
        Box::new(launcher),
    );
    (session, speaker)
}

fn expect_turn(step: Step) -> Turn {
    match step {
        Step::Turn(turn) => turn,
        other => panic!("expected a turn, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dial_number_and_speak_reply() {
    let launcher = FakeLauncher::default();
    let (mut session, speaker) = session_with(&Config::default(), vec![], launcher.clone());

    let turn = expect_turn(session.submit("call 555-123-4567").await.unwrap());

    assert!(turn.performed);
    assert_eq!(turn.outcome.response, "Calling 5551234567...");
    assert_eq!(*launcher.launched.lock().unwrap(), vec!["tel:5551234567"]);
    assert_eq!(*speaker.spoken.lock().unwrap(), vec!["Calling 5551234567..."]);
    assert!(session.state().is_idle());
}

#[tokio::test]
async fn test_dialer_failure_replaces_reply() {
    let launcher = FakeLauncher {
        dialer_broken: true,
        ..FakeLauncher::default()
    };
    let (mut session, speaker) = session_with(&Config::default(), vec![], launcher);

    let turn = expect_turn(session.submit("call 5551234567").await.unwrap());

    assert!(!turn.performed);
    assert_eq!(turn.outcome.response, responses::DIALER_FAILED);
    assert_eq!(*speaker.spoken.lock().unwrap(), vec![responses::DIALER_FAILED]);
    assert!(session.state().is_idle());
}

#[tokio::test]
async fn test_youtube_falls_back_to_web() {
    let launcher = FakeLauncher {
        broken: vec!["vnd.youtube://".to_string()],
        ..FakeLauncher::default()
    };
    let (mut session, _) = session_with(&Config::default(), vec![], launcher.clone());

    let turn = expect_turn(session.submit("open YouTube").await.unwrap());

    assert!(turn.performed);
    assert_eq!(
        turn.outcome.action,
        Action::Open(Resource::Url {
            primary: "vnd.youtube://".to_string(),
            fallback: Some("https://www.youtube.com".to_string()),
        })
    );
    assert_eq!(
        *launcher.launched.lock().unwrap(),
        vec!["https://www.youtube.com"]
    );
}

#[tokio::test]
async fn test_open_failure_when_both_uris_fail() {
    let launcher = FakeLauncher {
        broken: vec![
            "vnd.youtube://".to_string(),
            "https://www.youtube.com".to_string(),
        ],
        ..FakeLauncher::default()
    };
    let (mut session, _) = session_with(&Config::default(), vec![], launcher);

    let turn = expect_turn(session.submit("open youtube").await.unwrap());

    assert!(!turn.performed);
    assert_eq!(turn.outcome.response, responses::open_failed("vnd.youtube://"));
}

#[tokio::test]
async fn test_contact_is_resolved_through_directory() {
    let mut config = Config::default();
    config.assistant.contacts_enabled = true;
    let launcher = FakeLauncher::default();
    let (session, _) = session_with(&config, vec![], launcher.clone());
    let mut session = session.with_contacts(Box::new(ContactBook::new(vec![Contact {
        name: "Mom".to_string(),
        numbers: vec!["(555) 010-2030".to_string()],
    }])));

    let turn = expect_turn(session.submit("call mom").await.unwrap());

    assert!(turn.performed);
    assert_eq!(turn.outcome.response, "Calling Mom...");
    assert_eq!(*launcher.launched.lock().unwrap(), vec!["tel:5550102030"]);
}

#[tokio::test]
async fn test_contact_lookup_error_is_reported() {
    let mut config = Config::default();
    config.assistant.contacts_enabled = true;
    let (session, _) = session_with(&config, vec![], FakeLauncher::default());
    let mut session = session.with_contacts(Box::new(FailingDirectory));

    let turn = expect_turn(session.submit("call Grandpa").await.unwrap());

    assert!(!turn.performed);
    assert_eq!(turn.outcome.response, responses::CONTACTS_FAILED);
}

#[tokio::test]
async fn test_missing_directory_asks_for_number() {
    let mut config = Config::default();
    config.assistant.contacts_enabled = true;
    let (mut session, _) = session_with(&config, vec![], FakeLauncher::default());

    let turn = expect_turn(session.submit("call Grandpa").await.unwrap());

    assert!(turn.outcome.response.contains("Grandpa"));
    assert!(!turn.performed);
}

#[tokio::test]
async fn test_listen_until_input_closes() {
    let input = vec![
        Ok(Some("hello".to_string())),
        Ok(Some("   ".to_string())),
        Err(PlatformError::Recognition("no speech".to_string())),
    ];
    let (mut session, speaker) = session_with(&Config::default(), input, FakeLauncher::default());

    let turn = expect_turn(session.listen().await.unwrap());
    assert_eq!(turn.utterance, "hello");

    assert_eq!(session.listen().await.unwrap(), Step::Skipped);

    let turn = expect_turn(session.listen().await.unwrap());
    assert_eq!(turn.outcome.response, responses::LISTEN_FAILED);

    assert_eq!(session.listen().await.unwrap(), Step::Closed);
    assert_eq!(speaker.spoken.lock().unwrap().len(), 2);
    assert!(session.state().is_idle());
}

#[tokio::test]
async fn test_busy_session_rejects_new_work() {
    let (mut session, _) = session_with(&Config::default(), vec![], FakeLauncher::default());
    session.state.speaking = true;

    let err = session.submit("hello").await.unwrap_err();
    assert!(matches!(err, SessionError::Busy(state) if state.speaking));

    session.stop();
    assert!(session.state().is_idle());
    assert!(matches!(session.submit("hello").await, Ok(Step::Turn(_))));
}

#[tokio::test]
async fn test_stop_cancels_recognition_and_playback() {
    let input = ScriptedInput::new(vec![]);
    let cancelled = input.cancelled.clone();
    let speaker = RecordingSpeaker::default();
    let mut session = Session::new(
        Interpreter::default(),
        Box::new(input),
        Box::new(speaker.clone()),
        Box::new(FakeLauncher::default()),
    );

    session.state.listening = true;
    session.state.speaking = true;
    session.stop();

    assert!(cancelled.load(Ordering::SeqCst));
    assert!(speaker.stopped.load(Ordering::SeqCst));
    assert!(session.state().is_idle());
}

#[tokio::test]
async fn test_stop_when_idle_leaves_collaborators_alone() {
    let input = ScriptedInput::new(vec![]);
    let cancelled = input.cancelled.clone();
    let speaker = RecordingSpeaker::default();
    let mut session = Session::new(
        Interpreter::default(),
        Box::new(input),
        Box::new(speaker.clone()),
        Box::new(FakeLauncher::default()),
    );

    session.stop();

    assert!(!cancelled.load(Ordering::SeqCst));
    assert!(!speaker.stopped.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_punctuated_contact_name_is_found() {
    let mut config = Config::default();
    config.assistant.contacts_enabled = true;
    let launcher = FakeLauncher::default();
    let (session, _) = session_with(&config, vec![], launcher.clone());
    let mut session = session.with_contacts(Box::new(ContactBook::new(vec![
        Contact {
            name: "Mom".to_string(),
            numbers: vec!["555-010-2030".to_string()],
        },
        Contact {
            name: "Grandmom".to_string(),
            numbers: vec!["555-777-0000".to_string()],
        },
    ])));

    let turn = expect_turn(session.submit("Call Mom.").await.unwrap());

    assert!(turn.performed);
    assert_eq!(turn.outcome.response, "Calling Mom...");
    assert_eq!(*launcher.launched.lock().unwrap(), vec!["tel:5550102030"]);
}
