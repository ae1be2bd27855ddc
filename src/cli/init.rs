//! Init command implementation

use anyhow::{bail, Result};
use std::path::PathBuf;
use tracing::info;

use doro::config::Config;

/// Default configuration content for doro init
pub const DEFAULT_CONFIG: &str = r#"# Doro Configuration
# ===================

# ============================================================================
# ASSISTANT - How spoken phrases are interpreted
# ============================================================================
#
# Available options:
#   name              - Name the assistant answers to; "hi <name>" is a greeting (default: "Doro")
#   platform          - "android" or "ios"; decides deep links and whether settings can be opened
#   contacts_enabled  - Look up "call <name>" in the contacts below (default: false)
#   open_apps         - Enable "open <app>" (default: true)
#   min_phone_digits  - Digits needed for a call target to count as a number (default: 7)
#   fallback          - Reply when nothing matches

[assistant]
name = "Doro"
platform = "android"
contacts_enabled = false
open_apps = true
min_phone_digits = 7
fallback = "I'm not sure how to handle that. Try asking me to call someone, or say hello!"

# ============================================================================
# LAUNCHER - How dial and open requests are carried out on this machine
# ============================================================================
#
#   dry_run      - Only log actions (default: false)
#   opener       - Command used to open URIs; empty means open / xdg-open / cmd /C start
#   youtube_web  - Opened when the YouTube app can't be launched

[launcher]
dry_run = false
opener = ""
youtube_web = "https://www.youtube.com"

# ============================================================================
# CONTACTS - Used by "call <name>" when contacts_enabled = true
# ============================================================================
#
# The first contact whose name contains the spoken name wins, and only its
# first number is dialed.
#
# [[contact]]
# name = "Mom"
# numbers = ["+1 (555) 123-4567"]

# ============================================================================
# REPLIES - Custom canned replies, checked after the built-in commands
# ============================================================================

[[reply]]
triggers = ["how are you"]
response = "I'm doing great, thanks for asking!"
"#;

/// Write the default configuration file
pub async fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    // Default to global config path
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    info!("Wrote default config");
    println!("Created: {}", config_path.display());

    Ok(())
}
