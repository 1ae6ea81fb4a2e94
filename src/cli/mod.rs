//! CLI argument parsing and validation.

mod args;

pub use args::{
    Args, CacheAction, Command, MAX_TEXT_CHARS, MigrateArgs, QuizArgs, SpeakArgs, SpeakArgsError,
    VocabArgs,
};
