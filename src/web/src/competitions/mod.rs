use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use core::{Competition, CompetitionChanges, NewCompetition};

pub fn competition_routes() -> Router<AppData> {
    Router::new()
        .route("/api/competitions", post(create_competition_action))
        .route("/api/competitions", get(list_competitions_action))
        .route("/api/competitions/{competition_id}", get(get_competition_action))
        .route("/api/competitions/{competition_id}", put(update_competition_action))
}

async fn create_competition_action(
    State(state): State<AppData>,
    Json(new_competition): Json<NewCompetition>,
) -> ApiResult<Json<Competition>> {
    let mut db = state.data.write().await;

    let competition = db.create_competition(&new_competition)?;

    Ok(Json(competition))
}

async fn list_competitions_action(State(state): State<AppData>) -> Json<Vec<Competition>> {
    let db = state.data.read().await;

    Json(db.competitions())
}

async fn get_competition_action(
    State(state): State<AppData>,
    Path(competition_id): Path<u32>,
) -> ApiResult<Json<Competition>> {
    let db = state.data.read().await;

    let competition = db.competition_by_id(competition_id).ok_or_else(|| {
        ApiError::NotFound(format!("Competition with id {} not found", competition_id))
    })?;

    Ok(Json(competition))
}

async fn update_competition_action(
    State(state): State<AppData>,
    Path(competition_id): Path<u32>,
    Json(changes): Json<CompetitionChanges>,
) -> ApiResult<Json<Competition>> {
    let mut db = state.data.write().await;

    let competition = db.update_competition(competition_id, &changes)?;

    Ok(Json(competition))
}
