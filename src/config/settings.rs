//! Settings configuration types

mod assistant;
mod launcher;

pub use assistant::{AssistantSettings, DevicePlatform};
pub use launcher::LauncherSettings;
