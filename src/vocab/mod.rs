//! Vocabulary template generation.
//!
//! Emits one JSON deck per supported language with bracketed placeholders
//! where translations, pronunciations and examples still need filling in.

mod template;
mod words;

pub use template::{
    DEFAULT_WORD_LIMIT, TemplateFile, VocabEntry, VocabError, template_entries,
    template_file_name, write_templates,
};
pub use words::{COMMON_WORDS, LANGUAGES, Language, Level, SeedWord, language};

/// Resolve language codes, or every language when `codes` is empty.
pub fn resolve_languages(codes: &[String]) -> Result<Vec<Language>, VocabError> {
    if codes.is_empty() {
        return Ok(LANGUAGES.to_vec());
    }

    codes
        .iter()
        .map(|code| language(code).ok_or_else(|| VocabError::UnknownLanguage(code.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_language_lookup() {
        assert_eq!(language("ko").unwrap().name, "Korean");
        assert!(language("xx").is_none());
        assert_eq!(LANGUAGES.len(), 10);
    }

    #[test]
    fn test_resolve_languages() {
        assert_eq!(resolve_languages(&[]).unwrap().len(), 10);

        let picked = resolve_languages(&["fr".to_string(), "ja".to_string()]).unwrap();
        assert_eq!(picked.iter().map(|l| l.code).collect::<Vec<_>>(), ["fr", "ja"]);

        assert!(matches!(
            resolve_languages(&["klingon".to_string()]).unwrap_err(),
            VocabError::UnknownLanguage(code) if code == "klingon"
        ));
    }

    #[test]
    fn test_template_entry_placeholders() {
        let spanish = language("es").unwrap();
        let entries = template_entries(&spanish, DEFAULT_WORD_LIMIT);

        assert_eq!(entries.len(), 100);
        let first = &entries[0];
        assert_eq!(first.language, "es");
        assert_eq!(first.word, "[Spanish translation of 'hello']");
        assert_eq!(first.translation, "hello");
        assert_eq!(first.part_of_speech, "interjection");
        assert_eq!(first.difficulty, Level::Beginner);
        assert_eq!(first.example_sentence, "[Example sentence in Spanish]");
        assert_eq!(first.context_notes, "Common interjection in greetings context");
    }

    #[test]
    fn test_limit_is_capped_by_word_list() {
        let german = language("de").unwrap();

        assert_eq!(template_entries(&german, 3).len(), 3);
        assert_eq!(template_entries(&german, 10_000).len(), COMMON_WORDS.len());
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = &template_entries(&language("it").unwrap(), 1)[0];
        let json = serde_json::to_value(entry).unwrap();

        assert_eq!(json["partOfSpeech"], "interjection");
        assert_eq!(json["difficulty"], "beginner");
        assert_eq!(json["exampleTranslation"], "[English translation]");
        assert!(json.get("part_of_speech").is_none());
    }

    #[test]
    fn test_write_templates() {
        let temp_dir = TempDir::new().unwrap();
        let languages = resolve_languages(&["zh".to_string(), "ar".to_string()]).unwrap();

        let written = write_templates(temp_dir.path(), &languages, 5).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(written[0].path, temp_dir.path().join("vocabulary-zh-template.json"));
        assert_eq!(written[1].words, 5);

        let json = std::fs::read_to_string(&written[0].path).unwrap();
        assert!(json.starts_with("[\n  {\n    \"language\": \"zh\","));
        let entries: Vec<VocabEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries[3].translation, "please");
    }
}
