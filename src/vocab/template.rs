//! Placeholder vocabulary decks awaiting real translations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::words::{COMMON_WORDS, Language, Level};

/// Words per deck unless told otherwise.
pub const DEFAULT_WORD_LIMIT: usize = 100;

/// Errors that can occur while writing vocabulary templates.
#[derive(Error, Debug)]
pub enum VocabError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// One vocabulary row in the app's import format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VocabEntry {
    pub language: String,
    pub word: String,
    pub translation: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    pub difficulty: Level,
    pub theme: String,
    pub example_sentence: String,
    pub example_translation: String,
    pub context_notes: String,
}

/// A deck written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateFile {
    pub language: Language,
    pub path: PathBuf,
    pub words: usize,
}

/// Placeholder entries for the first `limit` common words.
pub fn template_entries(language: &Language, limit: usize) -> Vec<VocabEntry> {
    COMMON_WORDS
        .iter()
        .take(limit)
        .map(|w| VocabEntry {
            language: language.code.to_string(),
            word: format!("[{} translation of '{}']", language.name, w.english),
            translation: w.english.to_string(),
            pronunciation: "[pronunciation]".to_string(),
            part_of_speech: w.part_of_speech.to_string(),
            difficulty: w.level,
            theme: w.theme.to_string(),
            example_sentence: format!("[Example sentence in {}]", language.name),
            example_translation: "[English translation]".to_string(),
            context_notes: format!("Common {} in {} context", w.part_of_speech, w.theme),
        })
        .collect()
}

/// File name of a language's deck.
pub fn template_file_name(language: &Language) -> String {
    format!("vocabulary-{}-template.json", language.code)
}

/// Write one pretty-printed deck per language into `out_dir`.
pub fn write_templates(
    out_dir: &Path,
    languages: &[Language],
    limit: usize,
) -> Result<Vec<TemplateFile>, VocabError> {
    std::fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(languages.len());
    for language in languages {
        let entries = template_entries(language, limit);
        let path = out_dir.join(template_file_name(language));
        std::fs::write(&path, serde_json::to_string_pretty(&entries)?)?;
        info!(
            language = language.code,
            words = entries.len(),
            path = %path.display(),
            "wrote vocabulary template"
        );

        written.push(TemplateFile {
            language: *language,
            path,
            words: entries.len(),
        });
    }

    Ok(written)
}
