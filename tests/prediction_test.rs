use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{
    login, promote_to_admin, register_and_login, seed_match, seed_season_with_teams, spawn_app,
    TestApp,
};

async fn place_prediction(
    app: &TestApp,
    client: &Client,
    token: &str,
    match_id: Uuid,
    body: serde_json::Value,
) -> reqwest::Response {
    let mut payload = body;
    payload["match_id"] = json!(match_id);
    client
        .post(format!("{}/api/predictions", app.address))
        .bearer_auth(token)
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.")
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn scoring_awards_exact_outcome_and_miss_tiers() {
    let app = spawn_app().await;
    let client = Client::new();

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    let match_id = seed_match(&app, season_id, home, away, "scheduled").await;

    // Three users with three quality levels of guess for a 2:1 home win
    let (token_a, user_a, _) = register_and_login(&app, &client).await;
    let (token_b, user_b, _) = register_and_login(&app, &client).await;
    let (token_c, user_c, _) = register_and_login(&app, &client).await;

    let exact = place_prediction(
        &app,
        &client,
        &token_a,
        match_id,
        json!({ "predicted_outcome": "home_win", "predicted_home_score": 2, "predicted_away_score": 1 }),
    )
    .await;
    assert_eq!(exact.status().as_u16(), 201);

    let outcome_only = place_prediction(
        &app,
        &client,
        &token_b,
        match_id,
        json!({ "predicted_outcome": "home_win", "predicted_home_score": 3, "predicted_away_score": 0 }),
    )
    .await;
    assert_eq!(outcome_only.status().as_u16(), 201);

    let miss = place_prediction(
        &app,
        &client,
        &token_c,
        match_id,
        json!({ "predicted_outcome": "away_win", "predicted_home_score": 0, "predicted_away_score": 2 }),
    )
    .await;
    assert_eq!(miss.status().as_u16(), 201);

    // Admin moves the match along and enters the final score
    let (_, admin_id, admin_name) = register_and_login(&app, &client).await;
    promote_to_admin(&app, admin_id).await;
    let admin_token = login(&app, &client, &admin_name, "password123").await;

    let response = client
        .put(format!("{}/api/admin/matches/{}/status", app.address, match_id))
        .bearer_auth(&admin_token)
        .json(&json!({ "status": "in_progress" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let response = client
        .put(format!("{}/api/admin/matches/{}/result", app.address, match_id))
        .bearer_auth(&admin_token)
        .json(&json!({ "home_score": 2, "away_score": 1 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let points_of = |user_id: Uuid| {
        let pool = app.db_pool.clone();
        async move {
            let (points, correct, total): (i32, i32, i32) = sqlx::query_as(
                "SELECT points, correct_predictions, total_predictions FROM users WHERE id = $1",
            )
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .expect("fetch user counters");
            (points, correct, total)
        }
    };

    assert_eq!(points_of(user_a).await, (20, 1, 1));
    assert_eq!(points_of(user_b).await, (10, 1, 1));
    assert_eq!(points_of(user_c).await, (0, 0, 1));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn scoring_a_match_twice_is_rejected() {
    let app = spawn_app().await;
    let client = Client::new();

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    let match_id = seed_match(&app, season_id, home, away, "scheduled").await;

    let (token, _, _) = register_and_login(&app, &client).await;
    place_prediction(
        &app,
        &client,
        &token,
        match_id,
        json!({ "predicted_outcome": "draw" }),
    )
    .await;

    let (_, admin_id, admin_name) = register_and_login(&app, &client).await;
    promote_to_admin(&app, admin_id).await;
    let admin_token = login(&app, &client, &admin_name, "password123").await;

    client
        .put(format!("{}/api/admin/matches/{}/status", app.address, match_id))
        .bearer_auth(&admin_token)
        .json(&json!({ "status": "in_progress" }))
        .send()
        .await
        .expect("Failed to execute request.");
    client
        .put(format!("{}/api/admin/matches/{}/result", app.address, match_id))
        .bearer_auth(&admin_token)
        .json(&json!({ "home_score": 1, "away_score": 1 }))
        .send()
        .await
        .expect("Failed to execute request.");

    // The manual trigger must now refuse a second pass
    let response = client
        .post(format!(
            "{}/api/predictions/calculate/{}",
            app.address, match_id
        ))
        .bearer_auth(&admin_token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn predictions_close_once_the_match_starts() {
    let app = spawn_app().await;
    let client = Client::new();

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    let scheduled = seed_match(&app, season_id, home, away, "scheduled").await;
    let in_progress = seed_match(&app, season_id, home, away, "in_progress").await;

    let (token, _, _) = register_and_login(&app, &client).await;

    // Creating against a started match fails
    let response = place_prediction(
        &app,
        &client,
        &token,
        in_progress,
        json!({ "predicted_outcome": "home_win" }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 409);

    // Create while open, then the match starts, then mutation fails
    let response = place_prediction(
        &app,
        &client,
        &token,
        scheduled,
        json!({ "predicted_outcome": "home_win" }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("body");
    let prediction_id = body["data"]["id"].as_str().expect("id").to_string();

    sqlx::query("UPDATE matches SET status = 'in_progress' WHERE id = $1")
        .bind(scheduled)
        .execute(&app.db_pool)
        .await
        .expect("start match");

    let response = client
        .put(format!("{}/api/predictions/{}", app.address, prediction_id))
        .bearer_auth(&token)
        .json(&json!({ "predicted_outcome": "draw" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 409);

    let response = client
        .delete(format!("{}/api/predictions/{}", app.address, prediction_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn one_prediction_per_user_per_match() {
    let app = spawn_app().await;
    let client = Client::new();

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    let match_id = seed_match(&app, season_id, home, away, "scheduled").await;

    let (token, _, _) = register_and_login(&app, &client).await;

    let first = place_prediction(
        &app,
        &client,
        &token,
        match_id,
        json!({ "predicted_outcome": "home_win" }),
    )
    .await;
    assert_eq!(first.status().as_u16(), 201);

    let second = place_prediction(
        &app,
        &client,
        &token,
        match_id,
        json!({ "predicted_outcome": "draw" }),
    )
    .await;
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn users_cannot_touch_each_others_predictions() {
    let app = spawn_app().await;
    let client = Client::new();

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    let match_id = seed_match(&app, season_id, home, away, "scheduled").await;

    let (owner_token, _, _) = register_and_login(&app, &client).await;
    let (other_token, _, _) = register_and_login(&app, &client).await;

    let response = place_prediction(
        &app,
        &client,
        &owner_token,
        match_id,
        json!({ "predicted_outcome": "home_win" }),
    )
    .await;
    let body: serde_json::Value = response.json().await.expect("body");
    let prediction_id = body["data"]["id"].as_str().expect("id").to_string();

    let response = client
        .delete(format!("{}/api/predictions/{}", app.address, prediction_id))
        .bearer_auth(&other_token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn match_predictions_endpoint_hides_user_ids() {
    let app = spawn_app().await;
    let client = Client::new();

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    let match_id = seed_match(&app, season_id, home, away, "scheduled").await;

    let (token, _, _) = register_and_login(&app, &client).await;
    place_prediction(
        &app,
        &client,
        &token,
        match_id,
        json!({ "predicted_outcome": "home_win" }),
    )
    .await;

    let response = client
        .get(format!("{}/api/predictions/match/{}", app.address, match_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("body");
    let predictions = body["data"].as_array().expect("array");
    assert_eq!(predictions.len(), 1);
    assert!(predictions[0].get("user_id").is_none());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn negative_predicted_scores_are_rejected() {
    let app = spawn_app().await;
    let client = Client::new();

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    let match_id = seed_match(&app, season_id, home, away, "scheduled").await;

    let (token, _, _) = register_and_login(&app, &client).await;

    let response = place_prediction(
        &app,
        &client,
        &token,
        match_id,
        json!({ "predicted_outcome": "home_win", "predicted_home_score": -1, "predicted_away_score": 0 }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 400);

    // A valid prediction cannot be mutated into a negative one either
    let created = place_prediction(
        &app,
        &client,
        &token,
        match_id,
        json!({ "predicted_outcome": "home_win", "predicted_home_score": 2, "predicted_away_score": 1 }),
    )
    .await;
    assert_eq!(created.status().as_u16(), 201);
    let body: serde_json::Value = created.json().await.expect("body");
    let prediction_id = body["data"]["id"].as_str().expect("prediction id");

    let response = client
        .put(format!("{}/api/predictions/{}", app.address, prediction_id))
        .bearer_auth(&token)
        .json(&json!({ "predicted_home_score": -3 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 400);
}
