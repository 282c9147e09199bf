use sqlx::PgPool;
use uuid::Uuid;

use crate::models::league::*;

// Reference-data queries. Reads are public, writes are admin-gated at the
// route layer.

pub async fn list_leagues(pool: &PgPool) -> Result<Vec<League>, sqlx::Error> {
    sqlx::query_as::<_, League>("SELECT * FROM leagues ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn get_league(pool: &PgPool, league_id: Uuid) -> Result<Option<League>, sqlx::Error> {
    sqlx::query_as::<_, League>("SELECT * FROM leagues WHERE id = $1")
        .bind(league_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_league(pool: &PgPool, req: &CreateLeagueRequest) -> Result<League, sqlx::Error> {
    sqlx::query_as::<_, League>(
        "INSERT INTO leagues (id, name, code, logo_url) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&req.name)
    .bind(&req.code)
    .bind(&req.logo_url)
    .fetch_one(pool)
    .await
}

pub async fn list_seasons(pool: &PgPool, league_id: Option<Uuid>) -> Result<Vec<Season>, sqlx::Error> {
    match league_id {
        Some(league_id) => {
            sqlx::query_as::<_, Season>(
                "SELECT * FROM seasons WHERE league_id = $1 ORDER BY start_date DESC NULLS LAST",
            )
            .bind(league_id)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Season>("SELECT * FROM seasons ORDER BY start_date DESC NULLS LAST")
                .fetch_all(pool)
                .await
        }
    }
}

pub async fn get_season(pool: &PgPool, season_id: Uuid) -> Result<Option<Season>, sqlx::Error> {
    sqlx::query_as::<_, Season>("SELECT * FROM seasons WHERE id = $1")
        .bind(season_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_season(pool: &PgPool, req: &CreateSeasonRequest) -> Result<Season, sqlx::Error> {
    sqlx::query_as::<_, Season>(
        r#"
        INSERT INTO seasons (id, league_id, name, start_date, end_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.league_id)
    .bind(&req.name)
    .bind(req.start_date)
    .bind(req.end_date)
    .fetch_one(pool)
    .await
}

pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn get_team(pool: &PgPool, team_id: Uuid) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_team(pool: &PgPool, req: &CreateTeamRequest) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (id, name, logo_url, home_stadium_id)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.name)
    .bind(&req.logo_url)
    .bind(req.home_stadium_id)
    .fetch_one(pool)
    .await
}

pub async fn list_players(pool: &PgPool, limit: i64, offset: i64) -> Result<(Vec<Player>, i64), sqlx::Error> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players")
        .fetch_one(pool)
        .await?;
    let players = sqlx::query_as::<_, Player>(
        "SELECT * FROM players ORDER BY full_name LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok((players, total))
}

pub async fn get_player(pool: &PgPool, player_id: Uuid) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1")
        .bind(player_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_player(pool: &PgPool, req: &CreatePlayerRequest) -> Result<Player, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (id, full_name, birth_date, height_cm, weight_kg, position, image_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.full_name)
    .bind(req.birth_date)
    .bind(req.height_cm)
    .bind(req.weight_kg)
    .bind(&req.position)
    .bind(&req.image_url)
    .fetch_one(pool)
    .await
}

pub async fn list_stadiums(pool: &PgPool) -> Result<Vec<Stadium>, sqlx::Error> {
    sqlx::query_as::<_, Stadium>("SELECT * FROM stadiums ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn create_stadium(pool: &PgPool, req: &CreateStadiumRequest) -> Result<Stadium, sqlx::Error> {
    sqlx::query_as::<_, Stadium>(
        r#"
        INSERT INTO stadiums (id, name, city, address, capacity)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.name)
    .bind(&req.city)
    .bind(&req.address)
    .bind(req.capacity)
    .fetch_one(pool)
    .await
}

pub async fn list_referees(pool: &PgPool) -> Result<Vec<Referee>, sqlx::Error> {
    sqlx::query_as::<_, Referee>("SELECT * FROM referees ORDER BY full_name")
        .fetch_all(pool)
        .await
}

pub async fn create_referee(pool: &PgPool, req: &CreateRefereeRequest) -> Result<Referee, sqlx::Error> {
    sqlx::query_as::<_, Referee>(
        "INSERT INTO referees (id, full_name) VALUES ($1, $2) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&req.full_name)
    .fetch_one(pool)
    .await
}

pub async fn get_team_roster(
    pool: &PgPool,
    team_id: Uuid,
    season_id: Uuid,
) -> Result<Vec<TeamRoster>, sqlx::Error> {
    sqlx::query_as::<_, TeamRoster>(
        "SELECT * FROM team_rosters WHERE team_id = $1 AND season_id = $2 ORDER BY shirt_number NULLS LAST",
    )
    .bind(team_id)
    .bind(season_id)
    .fetch_all(pool)
    .await
}

pub async fn add_roster_entry(
    pool: &PgPool,
    req: &AddRosterEntryRequest,
) -> Result<TeamRoster, sqlx::Error> {
    sqlx::query_as::<_, TeamRoster>(
        r#"
        INSERT INTO team_rosters (id, team_id, player_id, season_id, shirt_number)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.team_id)
    .bind(req.player_id)
    .bind(req.season_id)
    .bind(req.shirt_number)
    .fetch_one(pool)
    .await
}

pub async fn list_transfers(pool: &PgPool, player_id: Option<Uuid>) -> Result<Vec<Transfer>, sqlx::Error> {
    match player_id {
        Some(player_id) => {
            sqlx::query_as::<_, Transfer>(
                "SELECT * FROM transfers WHERE player_id = $1 ORDER BY transfer_date DESC NULLS LAST",
            )
            .bind(player_id)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Transfer>(
                "SELECT * FROM transfers ORDER BY transfer_date DESC NULLS LAST",
            )
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn create_transfer(
    pool: &PgPool,
    req: &CreateTransferRequest,
) -> Result<Transfer, sqlx::Error> {
    sqlx::query_as::<_, Transfer>(
        r#"
        INSERT INTO transfers (id, player_id, from_team_id, to_team_id, season_id,
                               transfer_date, transfer_type, transfer_fee)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.player_id)
    .bind(req.from_team_id)
    .bind(req.to_team_id)
    .bind(req.season_id)
    .bind(req.transfer_date)
    .bind(&req.transfer_type)
    .bind(req.transfer_fee)
    .fetch_one(pool)
    .await
}
