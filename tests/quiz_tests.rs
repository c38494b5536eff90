// tests/quiz_tests.rs

mod common;

use axum::http::StatusCode;
use common::{body_string, count, get, location, post_form, register, seed_question, spawn_app};

#[tokio::test]
async fn quiz_page_lists_questions_and_answers() {
    // Arrange
    let (app, pool) = spawn_app().await;
    let cookie = register(&app, "alice").await;
    let (question_id, answer_ids) =
        seed_question(&pool, "Capital of Italy?", &[("Rome", true), ("Milan", false)]).await;

    // Act
    let response = get(&app, "/load_questions", Some(&cookie)).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Capital of Italy?"));
    assert!(body.contains("Rome"));
    assert!(body.contains("Milan"));
    assert!(body.contains(&format!("name=\"question_{}\"", question_id)));
    assert!(body.contains(&format!("value=\"{}\"", answer_ids[0])));
}

#[tokio::test]
async fn submission_scores_correct_answers_and_skips_unanswered() {
    // Arrange
    let (app, pool) = spawn_app().await;
    let cookie = register(&app, "alice").await;
    let (q1, a1) = seed_question(&pool, "1 + 1?", &[("2", true), ("3", false)]).await;
    let (q2, a2) = seed_question(&pool, "2 + 2?", &[("4", true), ("5", false)]).await;
    let (q3, a3) = seed_question(&pool, "3 + 3?", &[("6", true), ("7", false)]).await;
    let _ = seed_question(&pool, "Unanswered", &[("x", true)]).await;

    let (k1, v1) = (format!("question_{}", q1), a1[0].to_string());
    let (k2, v2) = (format!("question_{}", q2), a2[1].to_string());
    let (k3, v3) = (format!("question_{}", q3), a3[0].to_string());

    // Act
    let response = post_form(
        &app,
        "/load_questions",
        &[
            (k1.as_str(), v1.as_str()),
            (k2.as_str(), v2.as_str()),
            (k3.as_str(), v3.as_str()),
        ],
        Some(&cookie),
    )
    .await;

    // Assert: two correct out of three answered
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/quiz_result/2"));
    assert_eq!(count(&pool, "user_answers").await, 3);

    let scores: Vec<i64> = sqlx::query_scalar("SELECT score FROM user_answers ORDER BY question_id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(scores, vec![1, 0, 1]);
}

#[tokio::test]
async fn empty_submission_scores_zero_and_writes_nothing() {
    // Arrange
    let (app, pool) = spawn_app().await;
    let cookie = register(&app, "alice").await;
    let (q1, _) = seed_question(&pool, "Q", &[("A", true)]).await;
    let key = format!("question_{}", q1);

    // Act
    let response = post_form(&app, "/load_questions", &[(key.as_str(), "")], Some(&cookie)).await;

    // Assert
    assert_eq!(location(&response).as_deref(), Some("/quiz_result/0"));
    assert_eq!(count(&pool, "user_answers").await, 0);
}

#[tokio::test]
async fn unknown_answer_id_is_stored_without_selection() {
    // Arrange
    let (app, pool) = spawn_app().await;
    let cookie = register(&app, "alice").await;
    let (q1, _) = seed_question(&pool, "Q", &[("A", true)]).await;
    let key = format!("question_{}", q1);

    // Act
    let response = post_form(&app, "/load_questions", &[(key.as_str(), "12345")], Some(&cookie)).await;

    // Assert
    assert_eq!(location(&response).as_deref(), Some("/quiz_result/0"));
    let selected: Option<i64> =
        sqlx::query_scalar("SELECT selected_answer_id FROM user_answers")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(selected, None);
}

#[tokio::test]
async fn results_page_shows_percentage() {
    // Arrange
    let (app, pool) = spawn_app().await;
    for text in ["a", "b", "c", "d"] {
        seed_question(&pool, text, &[("x", true)]).await;
    }

    // Act
    let response = get(&app, "/quiz_result/2", None).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("out of 4"));
    assert!(body.contains("50%"));
}

#[tokio::test]
async fn results_page_with_no_questions_is_zero_percent() {
    let (app, _pool) = spawn_app().await;

    let response = get(&app, "/quiz_result/0", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("0%"));
}

#[tokio::test]
async fn results_page_rejects_non_numeric_score() {
    let (app, _pool) = spawn_app().await;

    for uri in ["/quiz_result/abc", "/quiz_result/-1"] {
        let response = get(&app, uri, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "GET {uri}");
    }
}

#[tokio::test]
async fn answer_from_another_question_is_scored_by_its_own_flag() {
    // Arrange
    let (app, pool) = spawn_app().await;
    let cookie = register(&app, "alice").await;
    let (q1, _) = seed_question(&pool, "First", &[("wrong here", false)]).await;
    let (_q2, q2_answers) = seed_question(&pool, "Second", &[("right there", true)]).await;
    let key = format!("question_{}", q1);
    let value = q2_answers[0].to_string();

    // Act
    let response = post_form(
        &app,
        "/load_questions",
        &[(key.as_str(), value.as_str())],
        Some(&cookie),
    )
    .await;

    // Assert
    assert_eq!(location(&response).as_deref(), Some("/quiz_result/1"));
    let (question_id, selected): (i64, Option<i64>) =
        sqlx::query_as("SELECT question_id, selected_answer_id FROM user_answers")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(question_id, q1);
    assert_eq!(selected, Some(q2_answers[0]));
}

#[tokio::test]
async fn results_page_does_not_clamp_percentage() {
    // Arrange
    let (app, pool) = spawn_app().await;
    seed_question(&pool, "Only one", &[("x", true)]).await;

    // Act
    let response = get(&app, "/quiz_result/3", None).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("out of 1"));
    assert!(body.contains("300%"));
}

#[tokio::test]
async fn results_page_accepts_scores_beyond_32_bits() {
    let (app, _pool) = spawn_app().await;

    let response = get(&app, "/quiz_result/4294967296", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("4294967296"));
}
