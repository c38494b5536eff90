// src/views/layout.rs

use maud::{DOCTYPE, Markup, html};

fn header() -> Markup {
    html! {
        header {
            nav {
                a href="/" { strong { "Quiz" } }
                " "
                a href="/load_questions" { "Take the quiz" }
                " "
                a href="/add_question" { "Add a question" }
            }
        }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Quiz" }
            }
            body {
                (header())
                main { (body) }
            }
        }
    }
}

/// Inline message shown above a form, e.g. a failed login.
pub fn error_message(error: Option<&str>) -> Markup {
    html! {
        @if let Some(error) = error {
            p class="error" role="alert" { (error) }
        }
    }
}
