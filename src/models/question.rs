// src/models/question.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::models::answer::{Answer, NewAnswer};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The prompt shown to the quiz taker.
    pub text: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A question together with all of its candidate answers, as shown on the quiz page.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionWithAnswers {
    pub question: Question,
    pub answers: Vec<Answer>,
}

/// DTO for authoring a new question with its answers.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1, max = 255))]
    pub text: String,

    /// Candidate answers in submission order. Empty, several correct,
    /// or none correct are all accepted.
    pub answers: Vec<NewAnswer>,
}

/// Any field starting with `answer_text_`. The checkbox suffix is the text
/// after the last underscore, so `answer_text_x_2` pairs with `is_correct_2`.
static ANSWER_TEXT_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^answer_text_(?:.*_)?([^_]*)$").expect("valid answer field pattern")
});

/// Collapses repeated keys: each key keeps the position of its first
/// occurrence and the value of its last one.
fn last_value_per_key(fields: &[(String, String)]) -> Vec<(&str, &str)> {
    let mut collapsed: Vec<(&str, &str)> = Vec::new();
    for (key, value) in fields {
        match collapsed.iter_mut().find(|(k, _)| *k == key.as_str()) {
            Some(entry) => entry.1 = value.as_str(),
            None => collapsed.push((key.as_str(), value.as_str())),
        }
    }
    collapsed
}

impl NewQuestion {
    /// Builds the request from the flat authoring form.
    ///
    /// The form posts `text`, then pairs of `answer_text_<n>` and an optional
    /// `is_correct_<n>` checkbox. An answer is correct only when its checkbox
    /// value is exactly `"on"`. A key sent twice counts once, with its last value.
    pub fn from_form_fields(fields: &[(String, String)]) -> Self {
        let collapsed = last_value_per_key(fields);
        let value_of = |name: &str| {
            collapsed
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        };

        let text = value_of("text")
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        let answers = collapsed
            .iter()
            .filter_map(|(key, value)| {
                let suffix = ANSWER_TEXT_FIELD.captures(key)?.get(1)?.as_str();
                let correct = value_of(&format!("is_correct_{}", suffix)) == Some("on");

                Some(NewAnswer {
                    text: value.to_string(),
                    correct,
                })
            })
            .collect();

        Self { text, answers }
    }
}
