use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use core::{Club, ClubChanges, NewClub};

pub fn club_routes() -> Router<AppData> {
    Router::new()
        .route("/api/clubs", post(create_club_action))
        .route("/api/clubs", get(list_clubs_action))
        .route("/api/clubs/{club_id}", put(update_club_action))
        .route("/api/users/{manager_id}/clubs", get(clubs_by_manager_action))
}

async fn create_club_action(
    State(state): State<AppData>,
    Json(new_club): Json<NewClub>,
) -> ApiResult<Json<Club>> {
    let mut db = state.data.write().await;

    let club = db.create_club(&new_club)?;

    Ok(Json(club))
}

async fn list_clubs_action(State(state): State<AppData>) -> Json<Vec<Club>> {
    let db = state.data.read().await;

    Json(db.clubs())
}

async fn update_club_action(
    State(state): State<AppData>,
    Path(club_id): Path<u32>,
    Json(changes): Json<ClubChanges>,
) -> ApiResult<Json<Club>> {
    let mut db = state.data.write().await;

    let club = db.update_club(club_id, &changes)?;

    Ok(Json(club))
}

async fn clubs_by_manager_action(
    State(state): State<AppData>,
    Path(manager_id): Path<u32>,
) -> Json<Vec<Club>> {
    let db = state.data.read().await;

    Json(db.clubs_by_manager(manager_id))
}
