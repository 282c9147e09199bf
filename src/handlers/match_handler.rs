use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::ApiError;
use crate::models::common::{ApiResponse, Paginated};
use crate::models::matches::{
    AddLineupEntryRequest, AddMatchEventRequest, AssignRefereeRequest, CreateMatchRequest,
    MatchDetail, MatchFilterQuery, MatchResultRequest, MatchStatus, MatchStatusRequest,
};
use crate::services::{AchievementService, ScoringService};

#[tracing::instrument(name = "List matches", skip(pool, filter))]
pub async fn list_matches(
    filter: web::Query<MatchFilterQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let page = filter.page.unwrap_or(1).max(1);
    let per_page = filter.per_page.unwrap_or(20).clamp(1, 100);
    let offset = (page - 1) * per_page;

    let (matches, total) = db::matches::list_matches(&pool, &filter, per_page, offset).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Matches",
        Paginated::new(matches, total, page, per_page),
    )))
}

#[tracing::instrument(name = "Get match detail", skip(pool))]
pub async fn get_match(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let match_id = path.into_inner();

    let match_row = db::matches::get_match_with_teams(&pool, match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Match"))?;

    let events = db::matches::get_match_events(&pool, match_id).await?;
    let lineups = db::matches::get_match_lineups(&pool, match_id).await?;
    let referees = db::matches::get_match_referees(&pool, match_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Match detail",
        MatchDetail {
            match_with_teams: match_row,
            events,
            lineups,
            referees,
        },
    )))
}

#[tracing::instrument(name = "Create match", skip(form, pool))]
pub async fn create_match(
    form: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    if form.home_team_id == form.away_team_id {
        return Err(ApiError::Validation(
            "A team cannot play against itself".into(),
        ));
    }

    db::catalog::get_season(&pool, form.season_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Season"))?;

    let match_row = db::matches::create_match(
        &pool,
        form.season_id,
        form.round.as_deref(),
        form.kickoff_time,
        form.home_team_id,
        form.away_team_id,
        form.stadium_id,
    )
    .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Match created", match_row)))
}

/// Enter the final score. The match must be in progress; this moves it to
/// finished and immediately scores all pending predictions on it.
#[tracing::instrument(name = "Record match result", skip(form, pool))]
pub async fn record_result(
    path: web::Path<Uuid>,
    form: web::Json<MatchResultRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let match_id = path.into_inner();

    if form.home_score < 0 || form.away_score < 0 {
        return Err(ApiError::Validation("Scores cannot be negative".into()));
    }

    let existing = db::matches::get_match(&pool, match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Match"))?;
    if existing.status != MatchStatus::InProgress {
        return Err(ApiError::Conflict(
            "Result can only be recorded for a match in progress".into(),
        ));
    }

    let affected_users: Vec<Uuid> = db::predictions::get_match_predictions(&pool, match_id)
        .await?
        .into_iter()
        .map(|p| p.user_id)
        .collect();

    let match_row = db::matches::record_result(&pool, match_id, form.home_score, form.away_score)
        .await?
        .ok_or_else(|| ApiError::Conflict("Match is no longer in progress".into()))?;

    let summary = ScoringService::new(pool.get_ref().clone())
        .score_match(match_id)
        .await?;

    let achievements = AchievementService::new(pool.get_ref().clone());
    for user_id in affected_users {
        achievements.check_and_unlock(user_id).await?;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Result recorded and predictions scored",
        serde_json::json!({ "match": match_row, "scoring": summary }),
    )))
}

#[tracing::instrument(name = "Set match status", skip(form, pool))]
pub async fn set_status(
    path: web::Path<Uuid>,
    form: web::Json<MatchStatusRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let match_id = path.into_inner();

    // finished is only reachable through result entry so scoring is never
    // skipped.
    if form.status == MatchStatus::Finished {
        return Err(ApiError::Validation(
            "Use the result endpoint to finish a match".into(),
        ));
    }

    let match_row = db::matches::set_status(&pool, match_id, form.status)
        .await?
        .ok_or_else(|| ApiError::not_found("Match"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Match status updated", match_row)))
}

#[tracing::instrument(name = "Add match event", skip(form, pool))]
pub async fn add_event(
    path: web::Path<Uuid>,
    form: web::Json<AddMatchEventRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let match_id = path.into_inner();

    db::matches::get_match(&pool, match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Match"))?;

    if form.minute < 0 || form.minute > 130 {
        return Err(ApiError::Validation("Event minute out of range".into()));
    }

    let event = db::matches::add_match_event(
        &pool,
        match_id,
        form.team_id,
        form.player_id,
        &form.event_type,
        form.minute,
    )
    .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Event added", event)))
}

#[tracing::instrument(name = "Add lineup entry", skip(form, pool))]
pub async fn add_lineup_entry(
    path: web::Path<Uuid>,
    form: web::Json<AddLineupEntryRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let match_id = path.into_inner();

    db::matches::get_match(&pool, match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Match"))?;

    let entry = db::matches::add_lineup_entry(
        &pool,
        match_id,
        form.team_id,
        form.player_id,
        form.is_starter,
        form.shirt_number,
        form.position.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Lineup entry added", entry)))
}

#[tracing::instrument(name = "Assign referee", skip(form, pool))]
pub async fn assign_referee(
    path: web::Path<Uuid>,
    form: web::Json<AssignRefereeRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let match_id = path.into_inner();

    db::matches::get_match(&pool, match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Match"))?;

    let assignment =
        db::matches::assign_referee(&pool, match_id, form.referee_id, &form.role).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Referee assigned", assignment)))
}
