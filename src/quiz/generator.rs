//! Templated quiz questions for lab experiments.

use serde::{Deserialize, Serialize};

const DEFAULT_SAFETY: &str = "Follow general lab safety protocols";
const DEFAULT_EQUIPMENT: &str = "Standard lab equipment";

/// A science lab experiment as exported from the `experiments` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub id: i64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub safety_warnings: Option<String>,
}

/// Topic a question belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Safety,
    Equipment,
    Theory,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Safety => "safety",
            QuestionCategory::Equipment => "equipment",
            QuestionCategory::Theory => "theory",
        }
    }
}

/// One row of `lab_quiz_questions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub experiment_id: i64,
    pub question: String,
    /// JSON array of the four answer options.
    pub options: String,
    /// Index into `options`.
    pub correct_answer: u8,
    pub explanation: String,
    pub category: QuestionCategory,
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn non_empty(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

fn options(choices: [&str; 4]) -> String {
    // Serializing a fixed array of strings cannot fail
    serde_json::to_string(&choices).unwrap_or_default()
}

/// Build the six questions (two each on safety, equipment and theory) for
/// one experiment. The correct answer is always the second option.
pub fn questions_for(experiment: &Experiment) -> Vec<QuizQuestion> {
    let id = experiment.id;
    let title = &experiment.title;
    let category = &experiment.category;
    let description = &experiment.description;
    let safety = non_empty(&experiment.safety_warnings, DEFAULT_SAFETY);
    let equipment = non_empty(&experiment.equipment, DEFAULT_EQUIPMENT);

    let safety_focus = match safety.split_once('.') {
        Some((first, _)) => first.to_string(),
        None => truncate(&safety, 80),
    };
    let key_equipment = match equipment.split_once(',') {
        Some((first, _)) => first.trim().to_string(),
        None => truncate(&equipment, 50),
    };
    let principle = if description.chars().count() < 80 {
        description.clone()
    } else {
        format!("{}...", truncate(description, 77))
    };

    let core_concepts = format!("Core concepts in {category}");

    let question = |text: String, choices: [&str; 4], explanation: String, category| QuizQuestion {
        experiment_id: id,
        question: text,
        options: options(choices),
        correct_answer: 1,
        explanation,
        category,
    };

    vec![
        question(
            format!("What is the primary safety concern when performing the {title} experiment?"),
            [
                "Working too slowly",
                safety_focus.as_str(),
                "Using too much equipment",
                "Taking too many notes",
            ],
            format!("This experiment requires attention to: {}", truncate(&safety, 150)),
            QuestionCategory::Safety,
        ),
        question(
            format!("What protective equipment should you wear for this {category} experiment?"),
            [
                "Casual clothing only",
                "Safety goggles and appropriate protective gear",
                "Just gloves",
                "No protection needed",
            ],
            format!(
                "{} experiments require proper safety equipment to prevent injury.",
                capitalize(category)
            ),
            QuestionCategory::Safety,
        ),
        question(
            format!("What key equipment is used in the {title} experiment?"),
            [
                "Computer only",
                key_equipment.as_str(),
                "Pencil and paper",
                "Calculator",
            ],
            format!("This experiment requires: {}", truncate(&equipment, 150)),
            QuestionCategory::Equipment,
        ),
        question(
            "Why is proper equipment setup important in this experiment?".to_string(),
            [
                "To impress others",
                "To ensure accurate results and safety",
                "To use more materials",
                "To take longer",
            ],
            "Proper setup ensures both safety and reliable experimental results.".to_string(),
            QuestionCategory::Equipment,
        ),
        question(
            format!("What scientific principle does the {title} experiment demonstrate?"),
            [
                "No particular principle",
                principle.as_str(),
                "Random observations",
                "Artistic expression",
            ],
            format!("This experiment demonstrates: {}", truncate(description, 200)),
            QuestionCategory::Theory,
        ),
        question(
            format!("What field of {category} does this experiment explore?"),
            [
                "None",
                core_concepts.as_str(),
                "Unrelated topics",
                "Historical facts only",
            ],
            format!("This experiment explores fundamental principles in {category}."),
            QuestionCategory::Theory,
        ),
    ]
}
