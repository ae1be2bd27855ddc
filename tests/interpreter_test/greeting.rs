//! Tests for greetings and other canned replies

use chrono::NaiveDate;
use doro::interpreter::{responses, Interpreter};

#[test]
fn test_greeting_is_case_insensitive() {
    let interpreter = Interpreter::default();

    for text in ["hello", "HELLO there", "Well, hello!", "Hi Doro", "hi doro, what's up"] {
        let outcome = interpreter.interpret(text);
        assert_eq!(outcome.response, responses::greeting("Doro"), "input: {}", text);
        assert!(outcome.action.is_none(), "input: {}", text);
    }
}

#[test]
fn test_thanks_and_goodbye() {
    let interpreter = Interpreter::default();

    assert_eq!(interpreter.interpret("Thank you!").response, responses::THANKS);
    assert_eq!(interpreter.interpret("ok goodbye").response, responses::GOODBYE);
    assert_eq!(interpreter.interpret("bye").response, responses::GOODBYE);
}

#[test]
fn test_time_uses_given_clock() {
    let interpreter = Interpreter::default();
    let evening = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(19, 30, 0)
        .unwrap();

    let outcome = interpreter.interpret_at("what time is it", evening);
    assert_eq!(outcome.response, "It's 7:30 PM.");
    assert!(outcome.action.is_none());
}
