//! Cached speech generation.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::TtsConfig;

use super::key::cache_key;
use super::store::{AudioStore, CacheStats, StoreError};
use super::synth::{SynthError, SynthesisRequest, Synthesizer};
use super::wav::to_wav;

/// Errors that can occur while producing speech.
///
/// Everything except `Store` is recovered by [`TtsService::speak`].
#[derive(Error, Debug)]
pub enum TtsError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Timed out after {timeout:?} generating speech for: {excerpt}")]
    Timeout { timeout: Duration, excerpt: String },

    #[error("Synthesis failed: {0}")]
    SynthesisFailed(SynthError),

    #[error("Cache error: {0}")]
    Store(#[from] StoreError),
}

impl TtsError {
    /// Whether this error ends only the current request.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TtsError::Store(_))
    }
}

/// A request for spoken audio.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub language: String,
    /// Speed multiplier, nominally 0.5 to 2.0.
    pub speed: f32,
    /// Overrides the configured deadline for this request.
    pub timeout: Option<Duration>,
}

impl SpeechRequest {
    /// Create a request at normal speed with the configured deadline.
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            speed: 1.0,
            timeout: None,
        }
    }

    /// Set the speed multiplier.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Override the synthesis deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Cache key for this request's text, language and speed.
    pub fn cache_key(&self) -> String {
        cache_key(&self.text, &self.language, self.speed)
    }
}

fn excerpt(text: &str) -> String {
    text.chars().take(50).collect()
}

/// Piper wrapper with a content-addressed audio cache in front.
pub struct TtsService<S: Synthesizer, C: AudioStore> {
    synthesizer: S,
    store: C,
    config: TtsConfig,
}

impl<S: Synthesizer, C: AudioStore> TtsService<S, C> {
    /// Create a new TTS service.
    pub fn new(synthesizer: S, store: C, config: TtsConfig) -> Self {
        Self {
            synthesizer,
            store,
            config,
        }
    }

    /// Produce WAV audio for `request`, reporting every failure.
    pub fn try_speak(&self, request: &SpeechRequest) -> Result<Vec<u8>, TtsError> {
        let model = self
            .config
            .voice_for(&request.language)
            .ok_or_else(|| TtsError::UnsupportedLanguage(request.language.clone()))?;

        let key = request.cache_key();
        if let Some(audio) = self.store.lookup(&key)? {
            debug!(%key, "cache hit");
            return Ok(audio);
        }

        let model_path = self.config.model_path(model);
        if !model_path.exists() {
            return Err(TtsError::ModelNotFound(model_path.display().to_string()));
        }

        let timeout = request.timeout.unwrap_or_else(|| self.config.timeout());
        let synthesis = SynthesisRequest {
            text: request.text.clone(),
            model_path,
            speed: request.speed,
            timeout,
        };

        let pcm = self.synthesizer.synthesize(&synthesis).map_err(|e| match e {
            SynthError::Timeout(timeout) => TtsError::Timeout {
                timeout,
                excerpt: excerpt(&request.text),
            },
            other => TtsError::SynthesisFailed(other),
        })?;

        let wav = to_wav(&pcm, &self.config.pcm_format());
        self.store.store(&key, &wav)?;
        info!(%key, language = %request.language, bytes = wav.len(), "synthesized speech");

        Ok(wav)
    }

    /// Produce WAV audio for `request`.
    ///
    /// Unsupported languages, missing models and synthesis failures yield
    /// `Ok(None)` after logging a diagnostic. Cache IO errors are returned.
    pub fn speak(&self, request: &SpeechRequest) -> Result<Option<Vec<u8>>, StoreError> {
        match self.try_speak(request) {
            Ok(audio) => Ok(Some(audio)),
            Err(TtsError::Store(e)) => Err(e),
            Err(e) => {
                warn!("{e}");
                Ok(None)
            }
        }
    }

    /// Report the number and total size of cached files.
    pub fn cache_stats(&self) -> Result<CacheStats, StoreError> {
        self.store.stats()
    }

    /// Delete every cached file, returning how many were removed.
    pub fn clear_cache(&self) -> Result<usize, StoreError> {
        self.store.clear()
    }
}
