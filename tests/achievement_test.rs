use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{register_and_login, spawn_app, TestApp};

async fn seed_achievement(app: &TestApp, condition_type: &str, value: i32, reward: i32) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO achievements (id, name, condition_type, condition_value, points_reward)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(format!("ach-{}", id.simple()))
    .bind(condition_type)
    .bind(value)
    .bind(reward)
    .execute(&app.db_pool)
    .await
    .expect("seed achievement");
    id
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn achievement_unlocks_exactly_once() {
    let app = spawn_app().await;
    let client = Client::new();

    let achievement_id = seed_achievement(&app, "total_points", 10, 5).await;
    let (token, user_id, _) = register_and_login(&app, &client).await;

    // Counter already past the threshold
    sqlx::query("UPDATE users SET points = 15 WHERE id = $1")
        .bind(user_id)
        .execute(&app.db_pool)
        .await
        .expect("bump points");

    let response = client
        .post(format!(
            "{}/api/achievements/check/{}",
            app.address, user_id
        ))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("body");
    assert_eq!(body["data"].as_array().expect("array").len(), 1);

    // Second check unlocks nothing new and does not re-credit the reward
    let response = client
        .post(format!(
            "{}/api/achievements/check/{}",
            app.address, user_id
        ))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.expect("body");
    assert_eq!(body["data"].as_array().expect("array").len(), 0);

    let rows: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM user_achievements WHERE achievement_id = $1")
            .bind(achievement_id)
            .fetch_one(&app.db_pool)
            .await
            .expect("count unlocks");
    assert_eq!(rows, 1);

    // 15 original + 5 reward, credited once
    let points: i32 = sqlx::query_scalar("SELECT points FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("points");
    assert_eq!(points, 20);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn below_threshold_unlocks_nothing() {
    let app = spawn_app().await;
    let client = Client::new();

    seed_achievement(&app, "correct_predictions", 5, 0).await;
    let (token, user_id, _) = register_and_login(&app, &client).await;

    let response = client
        .post(format!(
            "{}/api/achievements/check/{}",
            app.address, user_id
        ))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.expect("body");
    assert_eq!(body["data"].as_array().expect("array").len(), 0);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn users_cannot_trigger_checks_for_others() {
    let app = spawn_app().await;
    let client = Client::new();

    let (token, _, _) = register_and_login(&app, &client).await;
    let (_, other_id, _) = register_and_login(&app, &client).await;

    let response = client
        .post(format!(
            "{}/api/achievements/check/{}",
            app.address, other_id
        ))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 403);
}
