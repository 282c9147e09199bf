use std::net::TcpListener;

use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;

use matchday_backend::config::settings::{get_config, get_jwt_settings, DatabaseSettings};
use matchday_backend::run;
use matchday_backend::telemetry::{get_subscriber, init_subscriber};

// Initialise the tracing stack only once across all tests
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    // Each test gets its own throwaway database
    configuration.database.db_name = Uuid::new_v4().to_string();
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database).await;
    let jwt_settings = get_jwt_settings(&configuration);

    let server = run(listener, connection_pool.clone(), jwt_settings).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Register a fresh user through the API and log them in.
/// Returns (access_token, user_id, username).
pub async fn register_and_login(app: &TestApp, client: &Client) -> (String, Uuid, String) {
    let username = format!("user{}", Uuid::new_v4().simple());
    let password = "password123";
    let email = format!("{}@example.com", username);

    let response = client
        .post(format!("{}/api/auth/register", app.address))
        .json(&json!({ "username": username, "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success(), "registration failed");

    let response = client
        .post(format!("{}/api/auth/login", app.address))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success(), "login failed");

    let body: serde_json::Value = response.json().await.expect("login body");
    let token = body["data"]["access_token"]
        .as_str()
        .expect("access token")
        .to_string();
    let user_id: Uuid = body["data"]["user"]["id"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("user id");

    (token, user_id, username)
}

/// Promote a user to admin directly in the database, then issue a fresh
/// token pair via login so the claims carry the admin role.
pub async fn promote_to_admin(app: &TestApp, user_id: Uuid) {
    sqlx::query("UPDATE users SET role = 'admin' WHERE id = $1")
        .bind(user_id)
        .execute(&app.db_pool)
        .await
        .expect("Failed to promote user");
}

pub async fn login(app: &TestApp, client: &Client, username: &str, password: &str) -> String {
    let response = client
        .post(format!("{}/api/auth/login", app.address))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success(), "login failed");

    let body: serde_json::Value = response.json().await.expect("login body");
    body["data"]["access_token"]
        .as_str()
        .expect("access token")
        .to_string()
}

/// Seed a league, season and two teams; returns (season_id, home_team_id, away_team_id).
pub async fn seed_season_with_teams(app: &TestApp) -> (Uuid, Uuid, Uuid) {
    let league_id = Uuid::new_v4();
    sqlx::query("INSERT INTO leagues (id, name) VALUES ($1, 'Test League')")
        .bind(league_id)
        .execute(&app.db_pool)
        .await
        .expect("seed league");

    let season_id = Uuid::new_v4();
    sqlx::query("INSERT INTO seasons (id, league_id, name) VALUES ($1, $2, '2026')")
        .bind(season_id)
        .bind(league_id)
        .execute(&app.db_pool)
        .await
        .expect("seed season");

    let home_team_id = Uuid::new_v4();
    let away_team_id = Uuid::new_v4();
    for (id, name) in [(home_team_id, "Home FC"), (away_team_id, "Away FC")] {
        sqlx::query("INSERT INTO teams (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(name)
            .execute(&app.db_pool)
            .await
            .expect("seed team");
    }

    (season_id, home_team_id, away_team_id)
}

/// Insert a match directly with the given status, kicking off one hour from now
/// unless the status implies it already started.
pub async fn seed_match(
    app: &TestApp,
    season_id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    status: &str,
) -> Uuid {
    let match_id = Uuid::new_v4();
    let kickoff_offset = if status == "scheduled" { "1 hour" } else { "-1 hour" };
    sqlx::query(&format!(
        r#"
        INSERT INTO matches (id, season_id, kickoff_time, home_team_id, away_team_id, status)
        VALUES ($1, $2, NOW() + INTERVAL '{}', $3, $4, $5)
        "#,
        kickoff_offset
    ))
    .bind(match_id)
    .bind(season_id)
    .bind(home_team_id)
    .bind(away_team_id)
    .bind(status)
    .execute(&app.db_pool)
    .await
    .expect("seed match");

    match_id
}
