pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use core::r#match::{Match, MatchScoreUpdate, NewMatch};
use core::{NewPlayerStat, PlayerStat};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct MatchScoreRequest {
    pub home_score: u32,
    pub away_score: u32,
}

#[derive(Deserialize)]
pub struct PlayerStatRequest {
    pub player_id: u32,
    pub goals: u32,
    pub assists: u32,
}

pub async fn create_match_action(
    State(state): State<AppData>,
    Json(new_match): Json<NewMatch>,
) -> ApiResult<Json<Match>> {
    let mut db = state.data.write().await;

    let game = db.create_match(&new_match)?;

    Ok(Json(game))
}

pub async fn matches_by_league_action(
    State(state): State<AppData>,
    Path(league_id): Path<u32>,
) -> Json<Vec<Match>> {
    let db = state.data.read().await;

    Json(db.matches_by_league(league_id))
}

pub async fn record_score_action(
    State(state): State<AppData>,
    Path(match_id): Path<u32>,
    Json(request): Json<MatchScoreRequest>,
) -> ApiResult<Json<Match>> {
    let mut db = state.data.write().await;

    let game = db.update_match_score(&MatchScoreUpdate {
        match_id,
        home_score: request.home_score,
        away_score: request.away_score,
    })?;

    Ok(Json(game))
}

pub async fn create_player_stat_action(
    State(state): State<AppData>,
    Path(match_id): Path<u32>,
    Json(request): Json<PlayerStatRequest>,
) -> ApiResult<Json<PlayerStat>> {
    let mut db = state.data.write().await;

    let stat = db.create_player_stat(&NewPlayerStat {
        match_id,
        player_id: request.player_id,
        goals: request.goals,
        assists: request.assists,
    })?;

    Ok(Json(stat))
}

pub async fn player_stats_action(
    State(state): State<AppData>,
    Path(match_id): Path<u32>,
) -> Json<Vec<PlayerStat>> {
    let db = state.data.read().await;

    Json(db.player_stats_by_match(match_id))
}
