use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use core::league::{League, LeagueStanding, NewLeague};
use core::r#match::Match;

pub fn league_routes() -> Router<AppData> {
    Router::new()
        .route("/api/leagues", post(create_league_action))
        .route(
            "/api/competitions/{competition_id}/leagues",
            get(leagues_by_competition_action),
        )
        .route(
            "/api/leagues/{league_id}/schedule",
            post(generate_schedule_action),
        )
        .route(
            "/api/leagues/{league_id}/standings",
            post(update_standings_action),
        )
        .route(
            "/api/leagues/{league_id}/standings",
            get(get_standings_action),
        )
}

async fn create_league_action(
    State(state): State<AppData>,
    Json(new_league): Json<NewLeague>,
) -> ApiResult<Json<League>> {
    let mut db = state.data.write().await;

    let league = db.create_league(&new_league)?;

    Ok(Json(league))
}

async fn leagues_by_competition_action(
    State(state): State<AppData>,
    Path(competition_id): Path<u32>,
) -> Json<Vec<League>> {
    let db = state.data.read().await;

    Json(db.leagues_by_competition(competition_id))
}

async fn generate_schedule_action(
    State(state): State<AppData>,
    Path(league_id): Path<u32>,
) -> ApiResult<Json<Vec<Match>>> {
    let mut db = state.data.write().await;

    let matches = db.generate_league_schedule(league_id)?;

    Ok(Json(matches))
}

async fn update_standings_action(
    State(state): State<AppData>,
    Path(league_id): Path<u32>,
) -> ApiResult<Json<Vec<LeagueStanding>>> {
    let mut db = state.data.write().await;

    let standings = db.update_league_standings(league_id)?;

    Ok(Json(standings))
}

async fn get_standings_action(
    State(state): State<AppData>,
    Path(league_id): Path<u32>,
) -> Json<Vec<LeagueStanding>> {
    let db = state.data.read().await;

    Json(db.get_league_standings(league_id))
}
