// src/models/user_answer.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'user_answers' table in the database.
/// Stores one user's choice for one question in one quiz submission.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserAnswerRecord {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,

    /// `None` when the submitted answer id did not resolve to a stored answer.
    pub selected_answer_id: Option<i64>,

    /// 0 or 1, written by the scoring step right after the row is created.
    pub score: i64,
}

/// DTO for a quiz submission.
///
/// Key: Question ID
/// Value: the raw selected answer id exactly as submitted
#[derive(Debug, Clone, Default)]
pub struct QuizSubmission {
    pub selections: HashMap<i64, String>,
}

impl QuizSubmission {
    /// Reads `question_<id>=<answer id>` pairs from the quiz form.
    /// Other fields are ignored; a repeated question keeps its last value.
    pub fn from_form_fields(fields: &[(String, String)]) -> Self {
        let selections = fields
            .iter()
            .filter_map(|(key, value)| {
                let question_id = key.strip_prefix("question_")?.parse::<i64>().ok()?;
                Some((question_id, value.clone()))
            })
            .collect();

        Self { selections }
    }

    /// The submitted selection for a question, if any non-empty value was sent.
    pub fn selection_for(&self, question_id: i64) -> Option<&str> {
        self.selections
            .get(&question_id)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
