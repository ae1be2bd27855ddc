//! Contact entries for the built-in contact book

use serde::{Deserialize, Serialize};

/// A contact as written in config.toml:
///
/// ```toml
/// [[contact]]
/// name = "Mom"
/// numbers = ["+1 (555) 123-4567"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub name: String,

    /// Phone numbers in preference order
    #[serde(default)]
    pub numbers: Vec<String>,
}
