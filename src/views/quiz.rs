// src/views/quiz.rs

use maud::{Markup, html};

use super::page;
use crate::{
    models::question::QuestionWithAnswers,
    services::results::{QuizResult, format_percentage},
};

pub fn quiz_page(questions: &[QuestionWithAnswers]) -> Markup {
    page(
        "Quiz",
        html! {
            h1 { "Quiz" }
            @if questions.is_empty() {
                p { "There are no questions yet. " a href="/add_question" { "Add one" } "." }
            } @else {
                form method="post" action="/load_questions" {
                    @for entry in questions {
                        fieldset {
                            legend { (entry.question.text) }
                            @for answer in &entry.answers {
                                label {
                                    input type="radio"
                                        name=(format!("question_{}", entry.question.id))
                                        value=(answer.id);
                                    " " (answer.text)
                                }
                                br;
                            }
                        }
                    }
                    button type="submit" { "Submit answers" }
                }
            }
        },
    )
}

pub fn results_page(result: &QuizResult) -> Markup {
    page(
        "Results",
        html! {
            h1 { "Your results" }
            p {
                "You scored " strong { (result.score) } " out of " (result.total_questions) "."
            }
            p { "Percentage: " strong { (format_percentage(result.percentage)) "%" } }
            a href="/load_questions" { "Try again" }
        },
    )
}
