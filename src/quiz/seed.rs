//! Writing generated questions to the quiz table.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::generator::{Experiment, QuizQuestion, questions_for};

/// Table receiving the generated questions.
pub const QUIZ_TABLE: &str = "lab_quiz_questions";

/// Errors that can occur while seeding quiz questions.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Experiments file not found: {0}")]
    ExperimentsNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid experiments JSON: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Destination for seeded questions.
#[cfg_attr(test, mockall::automock)]
pub trait QuestionSink {
    /// Remove every existing question.
    fn clear(&mut self) -> Result<(), QuizError>;

    /// Append `questions`.
    fn insert(&mut self, questions: &[QuizQuestion]) -> Result<(), QuizError>;

    /// Make everything written so far durable.
    fn commit(&mut self) -> Result<(), QuizError>;
}

/// Read the experiment list exported from the `experiments` table.
pub fn load_experiments(path: &Path) -> Result<Vec<Experiment>, QuizError> {
    if !path.exists() {
        return Err(QuizError::ExperimentsNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path)?;
    let mut experiments: Vec<Experiment> = serde_json::from_str(&json)?;
    experiments.sort_by_key(|e| e.id);
    Ok(experiments)
}

/// Replace the quiz table contents with questions for `experiments`.
///
/// Returns the number of questions inserted.
pub fn seed<S: QuestionSink + ?Sized>(
    experiments: &[Experiment],
    sink: &mut S,
) -> Result<usize, QuizError> {
    sink.clear()?;

    let mut all = Vec::with_capacity(experiments.len() * 6);
    for experiment in experiments {
        debug!(title = %experiment.title, "generating questions");
        all.extend(questions_for(experiment));
    }

    sink.insert(&all)?;
    sink.commit()?;
    info!(questions = all.len(), experiments = experiments.len(), "seeded quiz questions");

    Ok(all.len())
}

/// Quote a string as a MySQL literal.
pub fn sql_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Builds a transactional MySQL script instead of talking to a server.
#[derive(Debug)]
pub struct SqlScriptSink {
    script: String,
}

impl SqlScriptSink {
    pub fn new() -> Self {
        Self {
            script: "START TRANSACTION;\n".to_string(),
        }
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    /// Write the script to `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), QuizError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &self.script)?;
        Ok(())
    }
}

impl Default for SqlScriptSink {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionSink for SqlScriptSink {
    fn clear(&mut self) -> Result<(), QuizError> {
        self.script.push_str(&format!("DELETE FROM {QUIZ_TABLE};\n"));
        Ok(())
    }

    fn insert(&mut self, questions: &[QuizQuestion]) -> Result<(), QuizError> {
        for q in questions {
            self.script.push_str(&format!(
                "INSERT INTO {QUIZ_TABLE} (experimentId, question, options, correctAnswer, explanation, category) VALUES ({}, {}, {}, {}, {}, {});\n",
                q.experiment_id,
                sql_literal(&q.question),
                sql_literal(&q.options),
                q.correct_answer,
                sql_literal(&q.explanation),
                sql_literal(q.category.as_str()),
            ));
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<(), QuizError> {
        self.script.push_str("COMMIT;\n");
        Ok(())
    }
}
