//! Tests for the "call" command

use doro::config::Config;
use doro::interpreter::{responses, Action, DialTarget, Interpreter};

#[test]
fn test_call_number() {
    let outcome = Interpreter::default().interpret("call 5551234567");

    assert_eq!(
        outcome.action,
        Action::Dial(DialTarget::Number("5551234567".to_string()))
    );
    assert!(outcome.response.contains("5551234567"));
}

#[test]
fn test_call_strips_separators() {
    let outcome = Interpreter::default().interpret("Call +1 (555) 123-4567 please");

    assert_eq!(
        outcome.action,
        Action::Dial(DialTarget::Number("15551234567".to_string()))
    );
}

#[test]
fn test_short_number_is_treated_as_name() {
    let outcome = Interpreter::default().interpret("call 911");

    assert!(outcome.action.is_none());
    assert_eq!(outcome.response, responses::contacts_unavailable("911"));
}

#[test]
fn test_min_digits_is_configurable() {
    let mut config = Config::default();
    config.assistant.min_phone_digits = 3;

    let outcome = Interpreter::from_config(&config).interpret("call 911");
    assert_eq!(outcome.action, Action::Dial(DialTarget::Number("911".to_string())));
}

#[test]
fn test_call_name_without_contacts_asks_for_number() {
    let outcome = Interpreter::default().interpret("call Grandma");

    assert!(outcome.action.is_none());
    assert!(outcome.response.contains("Grandma"));
    assert!(outcome.response.contains("contacts"));
}

#[test]
fn test_call_without_target_asks_who() {
    let interpreter = Interpreter::default();

    for text in ["call", "please call", "call   "] {
        let outcome = interpreter.interpret(text);
        assert_eq!(outcome.response, responses::ASK_WHO_TO_CALL, "input: {:?}", text);
        assert!(outcome.action.is_none());
    }
}

#[test]
fn test_interpretation_is_repeatable() {
    let interpreter = Interpreter::default();

    let first = interpreter.interpret("call 555 123 4567");
    let second = interpreter.interpret("call 555 123 4567");
    assert_eq!(first, second);
}

#[test]
fn test_contact_name_drops_sentence_punctuation() {
    let mut config = Config::default();
    config.assistant.contacts_enabled = true;
    let interpreter = Interpreter::from_config(&config);

    for text in ["call Mom.", "Call Mom!", "call Mom?", "call Mom, "] {
        let outcome = interpreter.interpret(text);
        assert_eq!(
            outcome.action,
            Action::Dial(DialTarget::Contact("Mom".to_string())),
            "input: {:?}",
            text
        );
    }
}

#[test]
fn test_punctuation_only_target_asks_who() {
    let outcome = Interpreter::default().interpret("call ?");

    assert_eq!(outcome.response, responses::ASK_WHO_TO_CALL);
    assert!(outcome.action.is_none());
}
