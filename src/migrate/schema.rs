//! Drizzle schema scanning.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)export const \w+ = mysqlTable\("(\w+)",\s*\{([^{}]*(?:\{[^{}]*\}[^{}]*)*)\}"#)
        .expect("table pattern is valid")
});

static COLUMN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+):\s*(?:int|varchar|text|timestamp|boolean|decimal|mysqlEnum|json)\(")
        .expect("column pattern is valid")
});

static WORD_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("boundary pattern is valid"));

static LOWER_UPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("case pattern is valid"));

/// Identifiers that look like column keys but are builder methods.
const NON_COLUMNS: [&str; 5] = ["on", "set", "where", "from", "to"];

/// Tables known to exist in the Supabase database.
pub const SUPABASE_TABLES: [&str; 12] = [
    "users",
    "finance_articles",
    "financial_glossary",
    "learning_badges",
    "user_learning_badges",
    "user_learning_progress",
    "article_quizzes",
    "user_quiz_attempts",
    "tier_assessments",
    "user_tier_assessment_attempts",
    "quota_usage",
    "cleanup_logs",
];

/// Convert a camelCase identifier to snake_case.
pub fn camel_to_snake(name: &str) -> String {
    let split_words = WORD_BOUNDARY_RE.replace_all(name, "${1}_${2}");
    LOWER_UPPER_RE
        .replace_all(&split_words, "${1}_${2}")
        .to_lowercase()
}

/// A column whose name changes under snake_case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRename {
    pub camel: String,
    pub snake: String,
}

/// Which tables take part in a migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableFilter {
    All,
    Only(BTreeSet<String>),
}

impl TableFilter {
    /// Allow-list of the tables present in Supabase.
    pub fn supabase() -> Self {
        TableFilter::Only(SUPABASE_TABLES.iter().map(|t| t.to_string()).collect())
    }

    /// Whether columns of `table` should be migrated.
    pub fn allows(&self, table: &str) -> bool {
        match self {
            TableFilter::All => true,
            TableFilter::Only(tables) => tables.contains(table),
        }
    }
}

/// Table name to its camelCase columns, in source order.
pub type TableRenames = BTreeMap<String, Vec<ColumnRename>>;

/// Find every `mysqlTable` definition and the columns needing a rename.
///
/// Tables without camelCase columns are left out.
pub fn extract_tables(schema: &str, filter: &TableFilter) -> TableRenames {
    let mut tables = TableRenames::new();

    for table in TABLE_RE.captures_iter(schema) {
        let name = &table[1];
        if !filter.allows(name) {
            continue;
        }

        let renames: Vec<ColumnRename> = COLUMN_RE
            .captures_iter(&table[2])
            .map(|column| column[1].to_string())
            .filter(|camel| !NON_COLUMNS.contains(&camel.as_str()))
            .filter_map(|camel| {
                let snake = camel_to_snake(&camel);
                (snake != camel).then_some(ColumnRename { camel, snake })
            })
            .collect();

        if !renames.is_empty() {
            tables.insert(name.to_string(), renames);
        }
    }

    tables
}

/// Number of columns across all tables.
pub fn column_count(tables: &TableRenames) -> usize {
    tables.values().map(Vec::len).sum()
}
