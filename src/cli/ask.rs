//! Ask command implementation
//!
//! Interprets a single utterance and prints the outcome without carrying out
//! any action.

use anyhow::{Context, Result};

use doro::config::Config;
use doro::interpreter::Interpreter;

pub fn ask_command(config: &Config, words: &[String], json: bool) -> Result<()> {
    let utterance = words.join(" ");
    let outcome = Interpreter::from_config(config).interpret(utterance.trim());

    if json {
        let out = serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", outcome.response);
    if !outcome.action.is_none() {
        println!("  action: {}", outcome.action);
    }

    Ok(())
}
