use sqlx::Row;

use crate::helpers::spawn_app;

#[tokio::test]
async fn save_waitlist_returns_200_for_a_valid_signup() {
    let app = spawn_app().await;
    let body = serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com"
    });

    let response = app.post_save_waitlist(&body).await;

    assert_eq!(200, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.expect("Failed to read the body");
    assert_eq!(payload, serde_json::json!({ "success": true }));
}

#[tokio::test]
async fn save_waitlist_persists_the_entrant() {
    let app = spawn_app().await;
    let body = serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com",
        "user_agent": "waitlist/0.1.0",
        "timestamp": "2025-08-01T12:00:00Z"
    });

    app.post_save_waitlist(&body).await;

    let saved = sqlx::query("SELECT name, email FROM email_list")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to fetch saved entrant");

    assert_eq!(saved.get::<String, _>("email"), "ursula_le_guin@gmail.com");
    assert_eq!(saved.get::<String, _>("name"), "Ursula Le Guin");
}

#[tokio::test]
async fn save_waitlist_returns_400_when_data_is_missing() {
    let app = spawn_app().await;

    let test_cases = vec![
        (
            serde_json::json!({ "name": "Ursula Le Guin" }),
            "missing the email",
        ),
        (
            serde_json::json!({ "email": "ursula_le_guin@gmail.com" }),
            "missing the name",
        ),
        (serde_json::json!({}), "missing both name and email"),
        (
            serde_json::json!({ "name": "", "email": "ursula_le_guin@gmail.com" }),
            "empty name",
        ),
        (
            serde_json::json!({ "name": "Ursula Le Guin", "email": "" }),
            "empty email",
        ),
        (
            serde_json::json!({ "name": "Ursula Le Guin", "email": null }),
            "null email",
        ),
    ];

    for (body, err_message) in test_cases {
        let response = app.post_save_waitlist(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            err_message
        );
        let payload: serde_json::Value = response.json().await.expect("Failed to read the body");
        assert_eq!(
            payload,
            serde_json::json!({ "error": "Name and email required" }),
            "Unexpected body when the payload was {}.",
            err_message
        );
    }
}

#[tokio::test]
async fn save_waitlist_rejects_a_duplicate_email() {
    let app = spawn_app().await;
    let body = serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com"
    });

    let first = app.post_save_waitlist(&body).await;
    assert_eq!(200, first.status().as_u16());

    let second = app.post_save_waitlist(&body).await;

    assert_eq!(400, second.status().as_u16());
    let payload: serde_json::Value = second.json().await.expect("Failed to read the body");
    assert_eq!(
        payload,
        serde_json::json!({ "error": "This email is already on the waitlist" })
    );
}

#[tokio::test]
async fn save_waitlist_returns_500_for_an_undecodable_body() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/functions/v1/save_waitlist", app.address))
        .header("Content-Type", "application/json")
        .body("this is not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn save_waitlist_rejects_non_post_methods() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(format!("{}/functions/v1/save_waitlist", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(405, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.expect("Failed to read the body");
    assert_eq!(payload, serde_json::json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn save_waitlist_answers_options_without_touching_the_body() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/functions/v1/save_waitlist", app.address),
        )
        .body("this is not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn save_waitlist_answers_a_cors_preflight() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/functions/v1/save_waitlist", app.address),
        )
        .header("Origin", "https://landing.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "authorization, content-type")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|value| value.to_str().unwrap()),
        Some("*")
    );
}

#[tokio::test]
async fn save_waitlist_responses_carry_cors_headers_for_cross_origin_callers() {
    let app = spawn_app().await;
    let body = serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com"
    });

    let response = app
        .api_client
        .post(format!("{}/functions/v1/save_waitlist", app.address))
        .header("Origin", "https://landing.example")
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|value| value.to_str().unwrap()),
        Some("*")
    );
}
