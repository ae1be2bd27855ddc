//! Tests for the "open" command

use doro::config::{Config, DevicePlatform};
use doro::interpreter::{responses, Action, Interpreter, Resource};

#[test]
fn test_open_youtube_has_web_fallback() {
    let outcome = Interpreter::default().interpret("open youtube");

    assert_eq!(outcome.response, responses::OPENING_YOUTUBE);
    assert_eq!(
        outcome.action,
        Action::Open(Resource::Url {
            primary: "vnd.youtube://".to_string(),
            fallback: Some("https://www.youtube.com".to_string()),
        })
    );
}

#[test]
fn test_open_youtube_on_ios_uses_ios_deep_link() {
    let mut config = Config::default();
    config.assistant.platform = DevicePlatform::Ios;

    let outcome = Interpreter::from_config(&config).interpret("Open YouTube");
    match outcome.action {
        Action::Open(Resource::Url { primary, fallback }) => {
            assert_eq!(primary, "youtube://");
            assert!(fallback.is_some());
        }
        other => panic!("unexpected action: {:?}", other),
    }
}

#[test]
fn test_open_without_app_asks_which() {
    let outcome = Interpreter::default().interpret("open");

    assert_eq!(outcome.response, responses::ASK_WHICH_APP);
    assert!(outcome.action.is_none());
}

#[test]
fn test_open_ignores_punctuation_and_filler() {
    let interpreter = Interpreter::default();

    for text in ["open YouTube.", "Open YouTube please", "open the youtube app!"] {
        let outcome = interpreter.interpret(text);
        assert_eq!(outcome.response, responses::OPENING_YOUTUBE, "input: {:?}", text);
        assert!(matches!(outcome.action, Action::Open(Resource::Url { .. })));
    }

    let outcome = interpreter.interpret("Open settings?");
    assert_eq!(outcome.action, Action::Open(Resource::Settings));
}

#[test]
fn test_unknown_app_name_has_no_trailing_period() {
    let outcome = Interpreter::default().interpret("open Spotify.");

    assert_eq!(outcome.response, responses::open_unsupported("Spotify"));
    assert!(outcome.action.is_none());
}
