//! Error type for platform collaborators

/// Failures reported by speech, contacts and launcher implementations
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Speech recognition failed: {0}")]
    Recognition(String),

    #[error("Speech playback failed: {0}")]
    Playback(String),

    #[error("Contact lookup failed: {0}")]
    Contacts(String),

    #[error("Failed to launch {target}: {reason}")]
    Launch { target: String, reason: String },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
