use sqlx::PgPool;
use uuid::Uuid;

use crate::models::standings::{SeasonStanding, StandingWithTeam, UpsertStandingRequest};

/// Standings for a season, latest round unless one is requested explicitly.
pub async fn get_season_standings(
    pool: &PgPool,
    season_id: Uuid,
    round: Option<i32>,
) -> Result<Vec<StandingWithTeam>, sqlx::Error> {
    let round = match round {
        Some(round) => round,
        None => {
            sqlx::query_scalar::<_, Option<i32>>(
                "SELECT MAX(round) FROM season_standings WHERE season_id = $1",
            )
            .bind(season_id)
            .fetch_one(pool)
            .await?
            .unwrap_or(0)
        }
    };

    sqlx::query_as::<_, StandingWithTeam>(
        r#"
        SELECT ss.id, ss.season_id, ss.team_id, t.name AS team_name,
               ss.round, ss.position, ss.played, ss.wins, ss.draws, ss.losses,
               ss.goals_for, ss.goals_against, ss.goal_difference, ss.points
        FROM season_standings ss
        JOIN teams t ON t.id = ss.team_id
        WHERE ss.season_id = $1 AND ss.round = $2
        ORDER BY ss.position ASC
        "#,
    )
    .bind(season_id)
    .bind(round)
    .fetch_all(pool)
    .await
}

/// Upsert keyed on the (season, team, round) uniqueness constraint. Points
/// and goal difference are derived here rather than trusted from the caller.
pub async fn upsert_standing(
    pool: &PgPool,
    req: &UpsertStandingRequest,
) -> Result<SeasonStanding, sqlx::Error> {
    let points = req.wins * 3 + req.draws;
    let goal_difference = req.goals_for - req.goals_against;

    sqlx::query_as::<_, SeasonStanding>(
        r#"
        INSERT INTO season_standings (
            id, season_id, team_id, round, position, played, wins, draws, losses,
            goals_for, goals_against, goal_difference, points
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        ON CONFLICT (season_id, team_id, round)
        DO UPDATE SET position = $5, played = $6, wins = $7, draws = $8, losses = $9,
                      goals_for = $10, goals_against = $11, goal_difference = $12, points = $13
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.season_id)
    .bind(req.team_id)
    .bind(req.round)
    .bind(req.position)
    .bind(req.played)
    .bind(req.wins)
    .bind(req.draws)
    .bind(req.losses)
    .bind(req.goals_for)
    .bind(req.goals_against)
    .bind(goal_difference)
    .bind(points)
    .fetch_one(pool)
    .await
}
