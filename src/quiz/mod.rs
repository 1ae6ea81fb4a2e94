//! Quiz question seeding for the science lab.
//!
//! Every experiment gets six templated multiple-choice questions built from
//! its title, category, description, equipment and safety notes.

mod generator;
mod seed;

pub use generator::{Experiment, QuestionCategory, QuizQuestion, questions_for};
pub use seed::{
    QUIZ_TABLE, QuestionSink, QuizError, SqlScriptSink, load_experiments, seed, sql_literal,
};

#[cfg(test)]
mod tests {
    use super::seed::MockQuestionSink;
    use super::*;
    use mockall::Sequence;
    use tempfile::TempDir;

    fn volcano() -> Experiment {
        Experiment {
            id: 7,
            title: "Baking Soda Volcano".to_string(),
            category: "CHEMISTRY".to_string(),
            difficulty: Some("beginner".to_string()),
            description: "Acid-base reaction producing carbon dioxide gas.".to_string(),
            equipment: Some("Baking soda, vinegar, dish soap".to_string()),
            safety_warnings: Some("Wear goggles. Vinegar stings eyes.".to_string()),
        }
    }

    fn options_of(q: &QuizQuestion) -> Vec<String> {
        serde_json::from_str(&q.options).unwrap()
    }

    // ===========================================
    // Question generation tests
    // ===========================================

    #[test]
    fn test_six_questions_per_experiment() {
        let questions = questions_for(&volcano());

        assert_eq!(questions.len(), 6);
        assert!(questions.iter().all(|q| q.experiment_id == 7));
        assert!(questions.iter().all(|q| q.correct_answer == 1));

        let categories: Vec<_> = questions.iter().map(|q| q.category).collect();
        assert_eq!(
            categories,
            [
                QuestionCategory::Safety,
                QuestionCategory::Safety,
                QuestionCategory::Equipment,
                QuestionCategory::Equipment,
                QuestionCategory::Theory,
                QuestionCategory::Theory,
            ]
        );
    }

    #[test]
    fn test_safety_question_uses_first_sentence() {
        let questions = questions_for(&volcano());

        assert_eq!(
            questions[0].question,
            "What is the primary safety concern when performing the Baking Soda Volcano experiment?"
        );
        assert_eq!(options_of(&questions[0])[1], "Wear goggles");
        assert_eq!(
            questions[0].explanation,
            "This experiment requires attention to: Wear goggles. Vinegar stings eyes."
        );
    }

    #[test]
    fn test_category_is_capitalized_in_explanation() {
        let questions = questions_for(&volcano());

        assert_eq!(
            questions[1].explanation,
            "Chemistry experiments require proper safety equipment to prevent injury."
        );
    }

    #[test]
    fn test_equipment_question_uses_first_item() {
        let questions = questions_for(&volcano());

        assert_eq!(options_of(&questions[2])[1], "Baking soda");
        assert_eq!(
            questions[2].explanation,
            "This experiment requires: Baking soda, vinegar, dish soap"
        );
    }

    #[test]
    fn test_missing_safety_and_equipment_use_defaults() {
        let experiment = Experiment {
            equipment: None,
            safety_warnings: Some(String::new()),
            ..volcano()
        };
        let questions = questions_for(&experiment);

        assert_eq!(options_of(&questions[0])[1], "Follow general lab safety protocols");
        assert_eq!(options_of(&questions[2])[1], "Standard lab equipment");
    }

    #[test]
    fn test_long_description_is_ellipsized() {
        let experiment = Experiment {
            description: "x".repeat(120),
            ..volcano()
        };
        let questions = questions_for(&experiment);

        let principle = &options_of(&questions[4])[1];
        assert_eq!(principle.chars().count(), 80);
        assert!(principle.ends_with("..."));
        assert_eq!(
            questions[4].explanation,
            format!("This experiment demonstrates: {}", "x".repeat(120))
        );
    }

    #[test]
    fn test_short_description_kept_whole() {
        let questions = questions_for(&volcano());

        assert_eq!(
            options_of(&questions[4])[1],
            "Acid-base reaction producing carbon dioxide gas."
        );
        assert_eq!(options_of(&questions[5])[1], "Core concepts in CHEMISTRY");
    }

    #[test]
    fn test_truncation_counts_characters() {
        let experiment = Experiment {
            safety_warnings: Some("ñ".repeat(100)),
            ..volcano()
        };
        let questions = questions_for(&experiment);

        assert_eq!(options_of(&questions[0])[1].chars().count(), 80);
    }

    // ===========================================
    // Seeding tests
    // ===========================================

    #[test]
    fn test_seed_clears_then_inserts_then_commits() {
        let mut sink = MockQuestionSink::new();
        let mut seq = Sequence::new();

        sink.expect_clear()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        sink.expect_insert()
            .withf(|questions| questions.len() == 12)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        sink.expect_commit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let experiments = vec![volcano(), Experiment { id: 8, ..volcano() }];
        let count = seed(&experiments, &mut sink).unwrap();

        assert_eq!(count, 12);
    }

    #[test]
    fn test_sql_script_sink_output() {
        let mut sink = SqlScriptSink::new();

        let count = seed(&[volcano()], &mut sink).unwrap();

        let script = sink.script();
        assert_eq!(count, 6);
        assert!(script.starts_with("START TRANSACTION;\nDELETE FROM lab_quiz_questions;\n"));
        assert!(script.ends_with("COMMIT;\n"));
        assert_eq!(script.matches("INSERT INTO lab_quiz_questions").count(), 6);
        assert!(script.contains(
            "VALUES (7, 'Why is proper equipment setup important in this experiment?', "
        ));
    }

    #[test]
    fn test_sql_literal_escaping() {
        assert_eq!(sql_literal("it's"), "'it''s'");
        assert_eq!(sql_literal(r"a\b"), r"'a\\b'");
        assert_eq!(sql_literal("two\nlines"), r"'two\nlines'");
    }

    #[test]
    fn test_load_experiments_from_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("experiments.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 2, "title": "Pendulum", "category": "physics",
                 "description": "Periodic motion.", "equipment": null,
                 "safetyWarnings": null},
                {"id": 1, "title": "Litmus", "category": "chemistry",
                 "difficulty": "easy", "description": "pH indicators."}
            ]"#,
        )
        .unwrap();

        let experiments = load_experiments(&path).unwrap();

        assert_eq!(experiments.len(), 2);
        assert_eq!(experiments[0].title, "Litmus");
        assert_eq!(experiments[1].safety_warnings, None);
    }

    #[test]
    fn test_load_experiments_missing_file() {
        let result = load_experiments(std::path::Path::new("/nonexistent/experiments.json"));

        assert!(matches!(result.unwrap_err(), QuizError::ExperimentsNotFound(_)));
    }

    #[test]
    fn test_write_script_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed").join("quiz.sql");
        let mut sink = SqlScriptSink::new();
        seed(&[volcano()], &mut sink).unwrap();

        sink.write_to(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), sink.script());
    }
}
