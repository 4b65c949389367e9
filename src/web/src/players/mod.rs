use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use core::{NewPlayer, Player, PlayerChanges};

pub fn player_routes() -> Router<AppData> {
    Router::new()
        .route("/api/players", post(create_player_action))
        .route("/api/players/{player_id}", put(update_player_action))
        .route("/api/players/{player_id}", delete(delete_player_action))
        .route("/api/teams/{team_id}/players", get(players_by_team_action))
}

async fn create_player_action(
    State(state): State<AppData>,
    Json(new_player): Json<NewPlayer>,
) -> ApiResult<Json<Player>> {
    let mut db = state.data.write().await;

    let player = db.create_player(&new_player)?;

    Ok(Json(player))
}

async fn update_player_action(
    State(state): State<AppData>,
    Path(player_id): Path<u32>,
    Json(changes): Json<PlayerChanges>,
) -> ApiResult<Json<Player>> {
    let mut db = state.data.write().await;

    let player = db.update_player(player_id, &changes)?;

    Ok(Json(player))
}

async fn delete_player_action(
    State(state): State<AppData>,
    Path(player_id): Path<u32>,
) -> StatusCode {
    let mut db = state.data.write().await;

    db.delete_player(player_id);

    StatusCode::NO_CONTENT
}

async fn players_by_team_action(
    State(state): State<AppData>,
    Path(team_id): Path<u32>,
) -> Json<Vec<Player>> {
    let db = state.data.read().await;

    Json(db.players_by_team(team_id))
}
