//! CLI argument definitions and parsing.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::migrate::MigrationProfile;
use crate::tts::SpeechRequest;
use crate::vocab::DEFAULT_WORD_LIMIT;

/// Longest text accepted for a single pronunciation clip.
pub const MAX_TEXT_CHARS: usize = 500;

/// Content and pronunciation tooling for the language-learning app.
#[derive(Parser, Debug)]
#[command(name = "lingo-tools")]
#[command(about = "Cached Piper TTS, schema migrations and seed data generators")]
#[command(version)]
pub struct Args {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate pronunciation audio, served from cache when available
    Speak(SpeakArgs),

    /// Inspect or empty the audio cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Generate camelCase to snake_case column migrations
    Migrate(MigrateArgs),

    /// Generate the lab quiz seed script
    Quiz(QuizArgs),

    /// Generate placeholder vocabulary decks
    Vocab(VocabArgs),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CacheAction {
    /// Show entry count and size
    Stats,
    /// Delete every cached clip
    Clear,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SpeakArgs {
    /// Language code, e.g. "es" or "fr-FR"
    pub language: String,

    /// Text to speak
    pub text: String,

    /// Speech speed multiplier (0.5 to 2.0)
    #[arg(short, long, default_value = "1.0")]
    pub speed: f32,

    /// Output WAV file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Synthesis deadline in seconds (overrides the settings file)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct MigrateArgs {
    /// Drizzle schema to scan
    #[arg(long, default_value = "drizzle/schema.ts")]
    pub schema: PathBuf,

    /// Directory for the generated SQL files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Only include tables that exist in Supabase
    #[arg(long)]
    pub supabase_only: bool,
}

impl MigrateArgs {
    pub fn profile(&self) -> MigrationProfile {
        if self.supabase_only {
            MigrationProfile::SupabaseOnly
        } else {
            MigrationProfile::Full
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct QuizArgs {
    /// JSON export of the experiments table
    #[arg(long)]
    pub experiments: PathBuf,

    /// SQL script to write
    #[arg(short, long, default_value = "lab-quiz-seed.sql")]
    pub output: PathBuf,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct VocabArgs {
    /// Directory for the generated JSON files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Words per language
    #[arg(long, default_value_t = DEFAULT_WORD_LIMIT)]
    pub limit: usize,

    /// Restrict to these language codes (repeatable)
    #[arg(short, long = "language")]
    pub languages: Vec<String>,
}

/// Errors that can occur when validating a speak request.
#[derive(Error, Debug, PartialEq)]
pub enum SpeakArgsError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text is {0} characters; the limit is {MAX_TEXT_CHARS}")]
    TextTooLong(usize),

    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    #[error("Speed must be between 0.5 and 2.0, got {0}")]
    SpeedOutOfRange(f32),
}

impl SpeakArgs {
    /// Validate the arguments and turn them into a speech request.
    ///
    /// # Examples
    /// ```
    /// use lingo_tools::cli::SpeakArgs;
    /// let args = SpeakArgs {
    ///     language: "es".to_string(),
    ///     text: "Hola".to_string(),
    ///     speed: 1.0,
    ///     output: None,
    ///     timeout_secs: None,
    /// };
    /// assert!(args.to_request().is_ok());
    /// ```
    pub fn to_request(&self) -> Result<SpeechRequest, SpeakArgsError> {
        let text = self.text.as_str();
        if text.trim().is_empty() {
            return Err(SpeakArgsError::EmptyText);
        }

        let chars = text.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(SpeakArgsError::TextTooLong(chars));
        }

        let language = self.language.as_str();
        if !(2..=10).contains(&language.len()) {
            return Err(SpeakArgsError::InvalidLanguage(language.to_string()));
        }

        if !(0.5..=2.0).contains(&self.speed) {
            return Err(SpeakArgsError::SpeedOutOfRange(self.speed));
        }

        let mut request = SpeechRequest::new(text, language).with_speed(self.speed);
        if let Some(secs) = self.timeout_secs {
            request = request.with_timeout(Duration::from_secs(secs));
        }

        Ok(request)
    }
}
