use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{
    login, promote_to_admin, register_and_login, seed_match, seed_season_with_teams, spawn_app,
};

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn match_list_keeps_real_totals_past_the_last_page() {
    let app = spawn_app().await;
    let client = Client::new();

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    for _ in 0..3 {
        seed_match(&app, season_id, home, away, "scheduled").await;
    }

    let response = client
        .get(format!(
            "{}/api/matches?season_id={}&page=99&per_page=2",
            app.address, season_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("match list body");
    let data = &body["data"];
    assert_eq!(data["items"].as_array().map(Vec::len), Some(0));
    assert_eq!(data["total"], 3);
    assert_eq!(data["total_pages"], 2);
    assert_eq!(data["page"], 99);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn match_list_totals_respect_the_filters() {
    let app = spawn_app().await;
    let client = Client::new();

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    seed_match(&app, season_id, home, away, "scheduled").await;
    seed_match(&app, season_id, home, away, "in_progress").await;

    let response = client
        .get(format!(
            "{}/api/matches?season_id={}&status=scheduled",
            app.address, season_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("match list body");
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn create_season_requires_an_existing_league() {
    let app = spawn_app().await;
    let client = Client::new();

    let (_, admin_id, admin_name) = register_and_login(&app, &client).await;
    promote_to_admin(&app, admin_id).await;
    let admin_token = login(&app, &client, &admin_name, "password123").await;

    let response = client
        .post(format!("{}/api/admin/seasons", app.address))
        .bearer_auth(&admin_token)
        .json(&json!({ "league_id": Uuid::new_v4(), "name": "2027" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
}
