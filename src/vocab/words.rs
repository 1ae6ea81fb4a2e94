//! Static language and word lists.

use serde::{Deserialize, Serialize};

/// A target language for the vocabulary decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: [Language; 10] = [
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "ru", name: "Russian" },
    Language { code: "ar", name: "Arabic" },
];

/// Look up a language by its code.
pub fn language(code: &str) -> Option<Language> {
    LANGUAGES.iter().copied().find(|l| l.code == code)
}

/// Learner level a word is introduced at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// An English headword to be translated into every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedWord {
    pub english: &'static str,
    pub theme: &'static str,
    pub part_of_speech: &'static str,
    pub level: Level,
}

const fn word(
    english: &'static str,
    theme: &'static str,
    part_of_speech: &'static str,
    level: Level,
) -> SeedWord {
    SeedWord {
        english,
        theme,
        part_of_speech,
        level,
    }
}

/// Shared headword list, grouped by theme.
pub const COMMON_WORDS: &[SeedWord] = &[
    // Greetings & basics
    word("hello", "greetings", "interjection", Level::Beginner),
    word("goodbye", "greetings", "interjection", Level::Beginner),
    word("thank you", "greetings", "phrase", Level::Beginner),
    word("please", "greetings", "adverb", Level::Beginner),
    word("yes", "basic", "adverb", Level::Beginner),
    word("no", "basic", "adverb", Level::Beginner),
    word("excuse me", "greetings", "phrase", Level::Beginner),
    word("sorry", "greetings", "interjection", Level::Beginner),
    word("good morning", "greetings", "phrase", Level::Beginner),
    word("good night", "greetings", "phrase", Level::Beginner),
    word("how are you", "greetings", "phrase", Level::Beginner),
    word("my name is", "greetings", "phrase", Level::Beginner),
    word("nice to meet you", "greetings", "phrase", Level::Beginner),
    word("see you later", "greetings", "phrase", Level::Beginner),
    word("welcome", "greetings", "interjection", Level::Beginner),
    word("congratulations", "greetings", "interjection", Level::Beginner),
    word("happy birthday", "greetings", "phrase", Level::Beginner),
    word("good luck", "greetings", "phrase", Level::Beginner),
    word("bless you", "greetings", "phrase", Level::Beginner),
    word("cheers", "greetings", "interjection", Level::Beginner),

    // Numbers
    word("one", "numbers", "number", Level::Beginner),
    word("two", "numbers", "number", Level::Beginner),
    word("three", "numbers", "number", Level::Beginner),
    word("four", "numbers", "number", Level::Beginner),
    word("five", "numbers", "number", Level::Beginner),
    word("six", "numbers", "number", Level::Beginner),
    word("seven", "numbers", "number", Level::Beginner),
    word("eight", "numbers", "number", Level::Beginner),
    word("nine", "numbers", "number", Level::Beginner),
    word("ten", "numbers", "number", Level::Beginner),
    word("twenty", "numbers", "number", Level::Beginner),
    word("thirty", "numbers", "number", Level::Beginner),
    word("forty", "numbers", "number", Level::Beginner),
    word("fifty", "numbers", "number", Level::Beginner),
    word("hundred", "numbers", "number", Level::Beginner),
    word("thousand", "numbers", "number", Level::Beginner),
    word("million", "numbers", "number", Level::Intermediate),
    word("first", "numbers", "adjective", Level::Beginner),
    word("second", "numbers", "adjective", Level::Beginner),
    word("third", "numbers", "adjective", Level::Beginner),

    // Colors
    word("red", "colors", "adjective", Level::Beginner),
    word("blue", "colors", "adjective", Level::Beginner),
    word("green", "colors", "adjective", Level::Beginner),
    word("yellow", "colors", "adjective", Level::Beginner),
    word("black", "colors", "adjective", Level::Beginner),
    word("white", "colors", "adjective", Level::Beginner),
    word("orange", "colors", "adjective", Level::Beginner),
    word("purple", "colors", "adjective", Level::Beginner),
    word("pink", "colors", "adjective", Level::Beginner),
    word("brown", "colors", "adjective", Level::Beginner),
    word("gray", "colors", "adjective", Level::Beginner),
    word("gold", "colors", "adjective", Level::Intermediate),
    word("silver", "colors", "adjective", Level::Intermediate),
    word("dark", "colors", "adjective", Level::Beginner),
    word("light", "colors", "adjective", Level::Beginner),

    // Time
    word("today", "time", "adverb", Level::Beginner),
    word("yesterday", "time", "adverb", Level::Beginner),
    word("tomorrow", "time", "adverb", Level::Beginner),
    word("now", "time", "adverb", Level::Beginner),
    word("later", "time", "adverb", Level::Beginner),
    word("before", "time", "adverb", Level::Beginner),
    word("after", "time", "adverb", Level::Beginner),
    word("morning", "time", "noun", Level::Beginner),
    word("afternoon", "time", "noun", Level::Beginner),
    word("evening", "time", "noun", Level::Beginner),
    word("night", "time", "noun", Level::Beginner),
    word("day", "time", "noun", Level::Beginner),
    word("week", "time", "noun", Level::Beginner),
    word("month", "time", "noun", Level::Beginner),
    word("year", "time", "noun", Level::Beginner),
    word("hour", "time", "noun", Level::Beginner),
    word("minute", "time", "noun", Level::Beginner),
    word("second", "time", "noun", Level::Beginner),
    word("Monday", "time", "noun", Level::Beginner),
    word("Friday", "time", "noun", Level::Beginner),

    // Food & drinks
    word("water", "drinks", "noun", Level::Beginner),
    word("coffee", "drinks", "noun", Level::Beginner),
    word("tea", "drinks", "noun", Level::Beginner),
    word("milk", "drinks", "noun", Level::Beginner),
    word("juice", "drinks", "noun", Level::Beginner),
    word("wine", "drinks", "noun", Level::Beginner),
    word("beer", "drinks", "noun", Level::Beginner),
    word("bread", "food", "noun", Level::Beginner),
    word("rice", "food", "noun", Level::Beginner),
    word("meat", "food", "noun", Level::Beginner),
    word("chicken", "food", "noun", Level::Beginner),
    word("fish", "food", "noun", Level::Beginner),
    word("egg", "food", "noun", Level::Beginner),
    word("cheese", "food", "noun", Level::Beginner),
    word("butter", "food", "noun", Level::Beginner),
    word("salt", "food", "noun", Level::Beginner),
    word("sugar", "food", "noun", Level::Beginner),
    word("apple", "fruits", "noun", Level::Beginner),
    word("banana", "fruits", "noun", Level::Beginner),
    word("orange", "fruits", "noun", Level::Beginner),
    word("strawberry", "fruits", "noun", Level::Beginner),
    word("grape", "fruits", "noun", Level::Beginner),
    word("tomato", "vegetables", "noun", Level::Beginner),
    word("potato", "vegetables", "noun", Level::Beginner),
    word("carrot", "vegetables", "noun", Level::Beginner),
    word("onion", "vegetables", "noun", Level::Beginner),
    word("lettuce", "vegetables", "noun", Level::Beginner),
    word("breakfast", "meals", "noun", Level::Beginner),
    word("lunch", "meals", "noun", Level::Beginner),
    word("dinner", "meals", "noun", Level::Beginner),
];
