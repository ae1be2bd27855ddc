//! Rules command implementation

use doro::config::Config;
use doro::interpreter::{CommandKind, Interpreter};

/// List the active rules in the order they are checked
pub fn rules_command(config: &Config) {
    let interpreter = Interpreter::from_config(config);
    let rules: Vec<_> = interpreter.rules().active().collect();

    println!("Rules ({}), first match wins:\n", rules.len());

    for (i, rule) in rules.iter().enumerate() {
        let triggers = rule
            .triggers
            .iter()
            .map(|t| format!("\"{}\"", t))
            .collect::<Vec<_>>()
            .join(", ");

        match &rule.kind {
            CommandKind::Reply(response) => {
                println!("  {:>2}. reply    {}", i + 1, triggers);
                println!("      -> {}", response);
            }
            kind => println!("  {:>2}. {:<8} {}", i + 1, kind.to_string(), triggers),
        }
    }

    println!("\nAnything else: \"{}\"", config.assistant.fallback);
    if !interpreter.contacts_enabled() {
        println!("Contacts are disabled: \"call <name>\" asks for a number.");
    }
}
