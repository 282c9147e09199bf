use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::models::matches::{
    Match, MatchEvent, MatchFilterQuery, MatchLineup, MatchReferee, MatchStatus, MatchWithTeams,
};

pub async fn get_match(pool: &PgPool, match_id: Uuid) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_match(
    pool: &PgPool,
    season_id: Uuid,
    round: Option<&str>,
    kickoff_time: chrono::DateTime<chrono::Utc>,
    home_team_id: Uuid,
    away_team_id: Uuid,
    stadium_id: Option<Uuid>,
) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches (id, season_id, round, kickoff_time, home_team_id, away_team_id, stadium_id, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'scheduled')
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(season_id)
    .bind(round)
    .bind(kickoff_time)
    .bind(home_team_id)
    .bind(away_team_id)
    .bind(stadium_id)
    .fetch_one(pool)
    .await
}

fn push_match_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &MatchFilterQuery) {
    if let Some(season_id) = filter.season_id {
        builder.push(" AND m.season_id = ").push_bind(season_id);
    }
    if let Some(round) = &filter.round {
        builder.push(" AND m.round = ").push_bind(round.clone());
    }
    if let Some(status) = filter.status {
        builder.push(" AND m.status = ").push_bind(status.as_str());
    }
}

/// Filterable, paginated match list joined with team and stadium names.
pub async fn list_matches(
    pool: &PgPool,
    filter: &MatchFilterQuery,
    limit: i64,
    offset: i64,
) -> Result<(Vec<MatchWithTeams>, i64), sqlx::Error> {
    let mut count_builder: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT COUNT(*) FROM matches m WHERE 1 = 1");
    push_match_filters(&mut count_builder, filter);
    let total: i64 = count_builder.build_query_scalar().fetch_one(pool).await?;

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        r#"
        SELECT m.*, ht.name AS home_team_name, aw.name AS away_team_name, s.name AS stadium_name
        FROM matches m
        JOIN teams ht ON ht.id = m.home_team_id
        JOIN teams aw ON aw.id = m.away_team_id
        LEFT JOIN stadiums s ON s.id = m.stadium_id
        WHERE 1 = 1
        "#,
    );
    push_match_filters(&mut builder, filter);

    builder
        .push(" ORDER BY m.kickoff_time ASC LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(offset);

    let rows = builder.build().fetch_all(pool).await?;

    let matches = rows
        .into_iter()
        .map(|row| {
            let status: MatchStatus = row.get("status");
            Ok(MatchWithTeams {
                match_row: Match {
                    id: row.get("id"),
                    season_id: row.get("season_id"),
                    round: row.get("round"),
                    kickoff_time: row.get("kickoff_time"),
                    home_team_id: row.get("home_team_id"),
                    away_team_id: row.get("away_team_id"),
                    home_score: row.get("home_score"),
                    away_score: row.get("away_score"),
                    status,
                    predictions_processed: row.get("predictions_processed"),
                    stadium_id: row.get("stadium_id"),
                    created_at: row.get("created_at"),
                    updated_at: row.get("updated_at"),
                },
                home_team_name: row.get("home_team_name"),
                away_team_name: row.get("away_team_name"),
                stadium_name: row.get("stadium_name"),
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()?;

    Ok((matches, total))
}

pub async fn get_match_with_teams(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Option<MatchWithTeams>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT m.*, ht.name AS home_team_name, aw.name AS away_team_name, s.name AS stadium_name
        FROM matches m
        JOIN teams ht ON ht.id = m.home_team_id
        JOIN teams aw ON aw.id = m.away_team_id
        LEFT JOIN stadiums s ON s.id = m.stadium_id
        WHERE m.id = $1
        "#,
    )
    .bind(match_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| MatchWithTeams {
        match_row: Match {
            id: row.get("id"),
            season_id: row.get("season_id"),
            round: row.get("round"),
            kickoff_time: row.get("kickoff_time"),
            home_team_id: row.get("home_team_id"),
            away_team_id: row.get("away_team_id"),
            home_score: row.get("home_score"),
            away_score: row.get("away_score"),
            status: row.get("status"),
            predictions_processed: row.get("predictions_processed"),
            stadium_id: row.get("stadium_id"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        },
        home_team_name: row.get("home_team_name"),
        away_team_name: row.get("away_team_name"),
        stadium_name: row.get("stadium_name"),
    }))
}

/// Final score entry: only valid from in_progress, moves the match to
/// finished. The caller decides when to trigger scoring.
pub async fn record_result(
    pool: &PgPool,
    match_id: Uuid,
    home_score: i32,
    away_score: i32,
) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET home_score = $2, away_score = $3, status = 'finished', updated_at = NOW()
        WHERE id = $1 AND status = 'in_progress'
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(home_score)
    .bind(away_score)
    .fetch_optional(pool)
    .await
}

/// Admin-driven transitions (postpone, cancel, force in_progress).
pub async fn set_status(
    pool: &PgPool,
    match_id: Uuid,
    status: MatchStatus,
) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET status = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(status)
    .fetch_optional(pool)
    .await
}

pub async fn get_match_events(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Vec<MatchEvent>, sqlx::Error> {
    sqlx::query_as::<_, MatchEvent>(
        "SELECT * FROM match_events WHERE match_id = $1 ORDER BY minute ASC",
    )
    .bind(match_id)
    .fetch_all(pool)
    .await
}

pub async fn add_match_event(
    pool: &PgPool,
    match_id: Uuid,
    team_id: Uuid,
    player_id: Uuid,
    event_type: &str,
    minute: i32,
) -> Result<MatchEvent, sqlx::Error> {
    sqlx::query_as::<_, MatchEvent>(
        r#"
        INSERT INTO match_events (id, match_id, team_id, player_id, event_type, minute)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(match_id)
    .bind(team_id)
    .bind(player_id)
    .bind(event_type)
    .bind(minute)
    .fetch_one(pool)
    .await
}

pub async fn get_match_lineups(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Vec<MatchLineup>, sqlx::Error> {
    sqlx::query_as::<_, MatchLineup>(
        "SELECT * FROM match_lineups WHERE match_id = $1 ORDER BY team_id, is_starter DESC",
    )
    .bind(match_id)
    .fetch_all(pool)
    .await
}

pub async fn add_lineup_entry(
    pool: &PgPool,
    match_id: Uuid,
    team_id: Uuid,
    player_id: Uuid,
    is_starter: bool,
    shirt_number: i32,
    position: Option<&str>,
) -> Result<MatchLineup, sqlx::Error> {
    sqlx::query_as::<_, MatchLineup>(
        r#"
        INSERT INTO match_lineups (id, match_id, team_id, player_id, is_starter, shirt_number, position)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(match_id)
    .bind(team_id)
    .bind(player_id)
    .bind(is_starter)
    .bind(shirt_number)
    .bind(position)
    .fetch_one(pool)
    .await
}

pub async fn get_match_referees(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Vec<MatchReferee>, sqlx::Error> {
    sqlx::query_as::<_, MatchReferee>("SELECT * FROM match_referees WHERE match_id = $1")
        .bind(match_id)
        .fetch_all(pool)
        .await
}

pub async fn assign_referee(
    pool: &PgPool,
    match_id: Uuid,
    referee_id: Uuid,
    role: &str,
) -> Result<MatchReferee, sqlx::Error> {
    sqlx::query_as::<_, MatchReferee>(
        r#"
        INSERT INTO match_referees (id, match_id, referee_id, role)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(match_id)
    .bind(referee_id)
    .bind(role)
    .fetch_one(pool)
    .await
}
