use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use core::{NewTeam, Team};
use serde::Deserialize;

pub fn team_routes() -> Router<AppData> {
    Router::new()
        .route("/api/teams", post(create_team_action))
        .route("/api/teams/{team_id}/register", post(register_team_action))
        .route("/api/clubs/{club_id}/teams", get(teams_by_club_action))
        .route("/api/leagues/{league_id}/teams", get(teams_by_league_action))
}

#[derive(Deserialize)]
struct RegisterTeamRequest {
    league_id: u32,
}

async fn create_team_action(
    State(state): State<AppData>,
    Json(new_team): Json<NewTeam>,
) -> ApiResult<Json<Team>> {
    let mut db = state.data.write().await;

    let team = db.create_team(&new_team)?;

    Ok(Json(team))
}

async fn register_team_action(
    State(state): State<AppData>,
    Path(team_id): Path<u32>,
    Json(request): Json<RegisterTeamRequest>,
) -> ApiResult<Json<Team>> {
    let mut db = state.data.write().await;

    let team = db.register_team(team_id, request.league_id)?;

    Ok(Json(team))
}

async fn teams_by_club_action(
    State(state): State<AppData>,
    Path(club_id): Path<u32>,
) -> Json<Vec<Team>> {
    let db = state.data.read().await;

    Json(db.teams_by_club(club_id))
}

async fn teams_by_league_action(
    State(state): State<AppData>,
    Path(league_id): Path<u32>,
) -> Json<Vec<Team>> {
    let db = state.data.read().await;

    Json(db.teams_by_league(league_id))
}
