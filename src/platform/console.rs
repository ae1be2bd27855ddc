//! Terminal stand-ins for speech recognition and playback

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

use super::{PlatformError, Result, SpeechInput, SpeechOutput};

/// Reads typed utterances from stdin, one per line
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
    prompt: Option<String>,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            prompt: None,
        }
    }

    /// Print `prompt` before waiting for each line
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechInput for StdinInput {
    async fn next_utterance(&mut self) -> Result<Option<String>> {
        if let Some(prompt) = &self.prompt {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(prompt.as_bytes()).await?;
            stdout.flush().await?;
        }

        self.lines
            .next_line()
            .await
            .map_err(|e| PlatformError::Recognition(e.to_string()))
    }
}

/// "Speaks" by printing `<name>: <text>` to stdout
pub struct ConsoleSpeaker {
    name: String,
}

impl ConsoleSpeaker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl SpeechOutput for ConsoleSpeaker {
    async fn speak(&self, text: &str) -> Result<()> {
        let line = format!("{}: {}\n", self.name, text);
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(line.as_bytes())
            .await
            .map_err(|e| PlatformError::Playback(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| PlatformError::Playback(e.to_string()))
    }
}
