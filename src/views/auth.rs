// src/views/auth.rs

use maud::{Markup, html};

use super::{layout::error_message, page};

/// Login page. With an active session it greets the user instead.
pub fn index_page(username: Option<&str>, error: Option<&str>) -> Markup {
    page(
        "Login",
        html! {
            @if let Some(username) = username {
                h1 { "Welcome, " (username) }
                ul {
                    li { a href="/load_questions" { "Take the quiz" } }
                    li { a href="/add_question" { "Add a question" } }
                    li { a href="/logout" { "Log out" } }
                }
            } @else {
                h1 { "Log in" }
                (error_message(error))
                form method="post" action="/" {
                    label { "Username " input type="text" name="username" required; }
                    label { "Password " input type="password" name="password" required; }
                    button type="submit" { "Log in" }
                }
                p { "No account yet? " a href="/register" { "Register" } }
            }
        },
    )
}

pub fn register_page(error: Option<&str>) -> Markup {
    page(
        "Register",
        html! {
            h1 { "Register" }
            (error_message(error))
            form method="post" action="/register" {
                label { "Username " input type="text" name="username" required; }
                label { "Email " input type="email" name="email" required; }
                label { "Password " input type="password" name="password" required; }
                button type="submit" { "Create account" }
            }
            p { "Already registered? " a href="/" { "Log in" } }
        },
    )
}
