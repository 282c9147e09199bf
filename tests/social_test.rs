use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{register_and_login, spawn_app};

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn post_comment_like_flow_shows_up_in_feed() {
    let app = spawn_app().await;
    let client = Client::new();

    let (author_token, _, author_name) = register_and_login(&app, &client).await;
    let (fan_token, _, _) = register_and_login(&app, &client).await;

    let response = client
        .post(format!("{}/api/social/posts", app.address))
        .bearer_auth(&author_token)
        .json(&json!({ "title": "Derby day", "content": "Who takes it?" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("body");
    let post_id = body["data"]["id"].as_str().expect("id").to_string();

    let response = client
        .post(format!("{}/api/social/posts/{}/comments", app.address, post_id))
        .bearer_auth(&fan_token)
        .json(&json!({ "content": "Home side, easily." }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    let response = client
        .post(format!("{}/api/social/posts/{}/like", app.address, post_id))
        .bearer_auth(&fan_token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    // Liking twice conflicts
    let response = client
        .post(format!("{}/api/social/posts/{}/like", app.address, post_id))
        .bearer_auth(&fan_token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 409);

    // Anonymous feed sees the counts
    let feed: serde_json::Value = client
        .get(format!("{}/api/posts", app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("body");
    let items = feed["data"]["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["like_count"], 1);
    assert_eq!(items[0]["comment_count"], 1);
    assert_eq!(items[0]["username"], author_name);
    assert_eq!(items[0]["is_liked"], false);

    // The fan's authenticated view has is_liked set
    let feed: serde_json::Value = client
        .get(format!("{}/api/posts", app.address))
        .bearer_auth(&fan_token)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("body");
    assert_eq!(feed["data"]["items"][0]["is_liked"], true);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn only_the_author_can_edit_a_post() {
    let app = spawn_app().await;
    let client = Client::new();

    let (author_token, _, _) = register_and_login(&app, &client).await;
    let (other_token, _, _) = register_and_login(&app, &client).await;

    let body: serde_json::Value = client
        .post(format!("{}/api/social/posts", app.address))
        .bearer_auth(&author_token)
        .json(&json!({ "title": "Opinion" }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("body");
    let post_id = body["data"]["id"].as_str().expect("id").to_string();

    let response = client
        .put(format!("{}/api/social/posts/{}", app.address, post_id))
        .bearer_auth(&other_token)
        .json(&json!({ "title": "Hijacked" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn empty_posts_are_rejected() {
    let app = spawn_app().await;
    let client = Client::new();

    let (token, _, _) = register_and_login(&app, &client).await;

    let response = client
        .post(format!("{}/api/social/posts", app.address))
        .bearer_auth(&token)
        .json(&json!({ "title": "   " }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 400);
}
