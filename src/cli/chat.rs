//! Chat command implementation
//!
//! Runs an interactive session on the terminal: typed lines stand in for
//! recognized speech and replies are printed instead of spoken.

use anyhow::Result;
use tracing::{debug, info};

use doro::config::Config;
use doro::interpreter::Interpreter;
use doro::platform::{ConsoleSpeaker, ContactBook, StdinInput, SystemLauncher};
use doro::session::{Session, Step};

pub async fn chat_command(config: &Config, dry_run: bool) -> Result<()> {
    let interpreter = Interpreter::from_config(config);
    let launcher = SystemLauncher::new(&config.launcher).dry_run(dry_run || config.launcher.dry_run);

    let mut session = Session::new(
        interpreter,
        Box::new(StdinInput::new().with_prompt("> ")),
        Box::new(ConsoleSpeaker::new(config.assistant.name.clone())),
        Box::new(launcher),
    );

    if config.assistant.contacts_enabled {
        let book = ContactBook::from_config(config);
        info!("Loaded {} contacts", book.len());
        session = session.with_contacts(Box::new(book));
    }

    println!(
        "Talk to {} (Ctrl-D to quit). Try \"hello\" or \"call 555 123 4567\".",
        config.assistant.name
    );

    loop {
        let step = tokio::select! {
            step = session.listen() => Some(step),
            _ = tokio::signal::ctrl_c() => None,
        };

        let Some(step) = step else {
            session.stop();
            break;
        };

        match step? {
            Step::Closed => break,
            Step::Skipped => continue,
            Step::Turn(turn) => debug!(?turn, "Turn complete"),
        }
    }

    Ok(())
}
