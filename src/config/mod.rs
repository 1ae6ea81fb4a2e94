//! Runtime configuration.
//!
//! Settings come from an optional TOML file; anything not set there falls
//! back to built-in defaults rooted in the user's home and cache directories.

mod settings;

pub use settings::{ConfigError, Settings, TtsConfig};
