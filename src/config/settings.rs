//! Settings file loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::tts::PcmFormat;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub tts: TtsConfig,
}

/// Settings for the cached Piper wrapper.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TtsConfig {
    /// Piper executable, looked up on `PATH` when not absolute.
    pub piper_bin: PathBuf,
    /// Directory holding `<model>.onnx` voice files.
    pub voices_dir: PathBuf,
    /// Directory holding cached `<key>.wav` files.
    pub cache_dir: PathBuf,
    pub timeout_secs: u64,
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    /// Language code to voice model id.
    pub voices: BTreeMap<String, String>,
}

impl Default for TtsConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let cache_root = dirs::cache_dir().unwrap_or_else(|| home.join(".cache"));
        let format = PcmFormat::default();

        Self {
            piper_bin: PathBuf::from("piper"),
            voices_dir: home.join("piper-voices"),
            cache_dir: cache_root.join("lingo-tools").join("tts-cache"),
            timeout_secs: 10,
            sample_rate: format.sample_rate,
            channels: format.channels,
            bits_per_sample: format.bits_per_sample,
            voices: default_voices(),
        }
    }
}

impl TtsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn pcm_format(&self) -> PcmFormat {
        PcmFormat {
            sample_rate: self.sample_rate,
            channels: self.channels,
            bits_per_sample: self.bits_per_sample,
        }
    }

    /// Voice model id registered for `language`.
    pub fn voice_for(&self, language: &str) -> Option<&str> {
        self.voices.get(language).map(String::as_str)
    }

    /// On-disk location of a voice model.
    pub fn model_path(&self, model: &str) -> PathBuf {
        self.voices_dir.join(format!("{model}.onnx"))
    }
}

fn default_voices() -> BTreeMap<String, String> {
    [
        ("es", "es_ES-davefx-medium"),
        ("es-ES", "es_ES-davefx-medium"),
        ("fr", "fr_FR-siwis-medium"),
        ("fr-FR", "fr_FR-siwis-medium"),
        ("de", "de_DE-thorsten-medium"),
        ("de-DE", "de_DE-thorsten-medium"),
        ("it", "it_IT-riccardo-x_low"),
        ("it-IT", "it_IT-riccardo-x_low"),
    ]
    .into_iter()
    .map(|(lang, model)| (lang.to_string(), model.to_string()))
    .collect()
}

impl Settings {
    /// Default settings file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lingo-tools").join("config.toml"))
    }

    /// Parse settings from TOML text.
    pub fn from_toml(src: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(src).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let src = std::fs::read_to_string(path)?;
        Self::from_toml(&src, path)
    }

    /// Load settings from `path` if given, otherwise from the default location.
    ///
    /// A missing default file is not an error; built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }
}
