use chrono::Utc;
use uuid::Uuid;

mod common;
use common::utils::{seed_match, seed_season_with_teams, spawn_app};

use matchday_backend::services::MatchLifecycleService;

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn due_scheduled_matches_are_promoted_to_in_progress() {
    let app = spawn_app().await;

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    let future = seed_match(&app, season_id, home, away, "scheduled").await;

    // A scheduled match whose kickoff already passed
    let due = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO matches (id, season_id, kickoff_time, home_team_id, away_team_id, status)
        VALUES ($1, $2, NOW() - INTERVAL '5 minutes', $3, $4, 'scheduled')
        "#,
    )
    .bind(due)
    .bind(season_id)
    .bind(home)
    .bind(away)
    .execute(&app.db_pool)
    .await
    .expect("seed due match");

    let lifecycle = MatchLifecycleService::new(app.db_pool.clone());
    let started = lifecycle
        .start_due_matches(Utc::now())
        .await
        .expect("run cycle");

    assert_eq!(started, vec![due]);

    let (status, home_score): (String, Option<i32>) =
        sqlx::query_as("SELECT status, home_score FROM matches WHERE id = $1")
            .bind(due)
            .fetch_one(&app.db_pool)
            .await
            .expect("fetch match");
    assert_eq!(status, "in_progress");
    assert_eq!(home_score, Some(0));

    // The future match is untouched
    let status: String = sqlx::query_scalar("SELECT status FROM matches WHERE id = $1")
        .bind(future)
        .fetch_one(&app.db_pool)
        .await
        .expect("fetch match");
    assert_eq!(status, "scheduled");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn lifecycle_cycle_is_idempotent() {
    let app = spawn_app().await;

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    let due = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO matches (id, season_id, kickoff_time, home_team_id, away_team_id, status)
        VALUES ($1, $2, NOW() - INTERVAL '5 minutes', $3, $4, 'scheduled')
        "#,
    )
    .bind(due)
    .bind(season_id)
    .bind(home)
    .bind(away)
    .execute(&app.db_pool)
    .await
    .expect("seed due match");

    let lifecycle = MatchLifecycleService::new(app.db_pool.clone());
    let first = lifecycle.start_due_matches(Utc::now()).await.expect("first");
    let second = lifecycle
        .start_due_matches(Utc::now())
        .await
        .expect("second");

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn finished_and_cancelled_matches_are_never_started() {
    let app = spawn_app().await;

    let (season_id, home, away) = seed_season_with_teams(&app).await;
    for status in ["finished", "cancelled", "postponed"] {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO matches (id, season_id, kickoff_time, home_team_id, away_team_id, status)
            VALUES ($1, $2, NOW() - INTERVAL '1 day', $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(season_id)
        .bind(home)
        .bind(away)
        .bind(status)
        .execute(&app.db_pool)
        .await
        .expect("seed match");
    }

    let lifecycle = MatchLifecycleService::new(app.db_pool.clone());
    let started = lifecycle
        .start_due_matches(Utc::now())
        .await
        .expect("run cycle");
    assert!(started.is_empty());
}
