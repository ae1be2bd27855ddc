//! Tests for unmatched input

use doro::config::Config;
use doro::interpreter::{responses, Interpreter};

#[test]
fn test_unmatched_input_gets_fallback() {
    let interpreter = Interpreter::default();

    for text in ["", "play some music", "what's the weather like", "navigate home"] {
        let outcome = interpreter.interpret(text);
        assert_eq!(outcome.response, responses::FALLBACK, "input: {:?}", text);
        assert!(outcome.action.is_none());
    }
}

#[test]
fn test_custom_fallback_from_config() {
    let config = Config::from_toml(
        r#"
[assistant]
fallback = "Sorry?"
"#,
    )
    .unwrap();

    let outcome = Interpreter::from_config(&config).interpret("sing a song");
    assert_eq!(outcome.response, "Sorry?");
}
