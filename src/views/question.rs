// src/views/question.rs

use maud::{Markup, html};

use super::page;

/// Number of blank answer rows offered on a fresh form.
const ANSWER_ROWS: usize = 4;

/// Empty authoring form. Answers are posted as `answer_text_<n>` with an
/// optional `is_correct_<n>` checkbox, which browsers submit as `"on"`.
pub fn question_form() -> Markup {
    page(
        "Add a question",
        html! {
            h1 { "Add a question" }
            form method="post" action="/add_question" {
                label {
                    "Question "
                    input type="text" name="text" maxlength="255" required;
                }
                @for n in 1..=ANSWER_ROWS {
                    fieldset {
                        legend { "Answer " (n) }
                        input type="text" name=(format!("answer_text_{n}"));
                        label {
                            input type="checkbox" name=(format!("is_correct_{n}"));
                            " Correct"
                        }
                    }
                }
                button type="submit" { "Save question" }
            }
        },
    )
}
