//! Launcher that hands `tel:` and app URIs to the desktop opener

use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

use super::{Launcher, PlatformError, Result};
use crate::config::LauncherSettings;

/// Opens URIs with the OS opener (`open`, `xdg-open`, `cmd /C start`).
///
/// In dry-run mode every request is only logged and reported as successful.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    dry_run: bool,
    opener: Vec<String>,
}

impl SystemLauncher {
    pub fn new(settings: &LauncherSettings) -> Self {
        let opener = if settings.opener.trim().is_empty() {
            default_opener()
        } else {
            settings
                .opener
                .split_whitespace()
                .map(str::to_string)
                .collect()
        };

        Self {
            dry_run: settings.dry_run,
            opener,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    async fn run_opener(&self, target: &str) -> Result<()> {
        if self.dry_run {
            info!("[dry-run] open {}", target);
            return Ok(());
        }

        let Some((program, args)) = self.opener.split_first() else {
            return Err(PlatformError::Launch {
                target: target.to_string(),
                reason: "no opener configured".to_string(),
            });
        };

        let output = Command::new(program)
            .args(args)
            .arg(target)
            .output()
            .await
            .map_err(|e| PlatformError::Launch {
                target: target.to_string(),
                reason: format!("failed to run {}: {}", program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlatformError::Launch {
                target: target.to_string(),
                reason: format!("{} exited with {}: {}", program, output.status, stderr.trim()),
            });
        }

        info!("Opened {}", target);
        Ok(())
    }
}

fn default_opener() -> Vec<String> {
    #[cfg(target_os = "macos")]
    return vec!["open".to_string()];
    #[cfg(target_os = "windows")]
    return vec!["cmd".to_string(), "/C".to_string(), "start".to_string(), String::new()];
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    return vec!["xdg-open".to_string()];
}

fn settings_uri() -> &'static str {
    #[cfg(target_os = "macos")]
    return "x-apple.systempreferences:";
    #[cfg(target_os = "windows")]
    return "ms-settings:";
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    return "settings://";
}

#[async_trait]
impl Launcher for SystemLauncher {
    async fn dial(&self, number: &str) -> Result<()> {
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(PlatformError::Launch {
                target: format!("tel:{}", number),
                reason: "not a digit-only number".to_string(),
            });
        }
        self.run_opener(&format!("tel:{}", number)).await
    }

    async fn open_uri(&self, uri: &str) -> Result<()> {
        self.run_opener(uri).await
    }

    async fn open_settings(&self) -> Result<()> {
        self.run_opener(settings_uri()).await
    }
}
