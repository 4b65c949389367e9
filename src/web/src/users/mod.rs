use crate::{ApiResult, AppData};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use core::{NewUser, User};

pub fn user_routes() -> Router<AppData> {
    Router::new()
        .route("/api/users", post(create_user_action))
        .route("/api/users", get(list_users_action))
}

async fn create_user_action(
    State(state): State<AppData>,
    Json(new_user): Json<NewUser>,
) -> ApiResult<Json<User>> {
    let mut db = state.data.write().await;

    let user = db.create_user(&new_user)?;

    Ok(Json(user))
}

async fn list_users_action(State(state): State<AppData>) -> Json<Vec<User>> {
    let db = state.data.read().await;

    Json(db.users())
}
