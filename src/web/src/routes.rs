use crate::AppData;
use crate::clubs::club_routes;
use crate::competitions::competition_routes;
use crate::leagues::league_routes;
use crate::players::player_routes;
use crate::r#match::routes::match_routes;
use crate::teams::team_routes;
use crate::users::user_routes;
use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use chrono::Utc;
use serde_json::json;

async fn healthcheck() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .route("/healthcheck", get(healthcheck))
            .merge(user_routes())
            .merge(competition_routes())
            .merge(league_routes())
            .merge(club_routes())
            .merge(team_routes())
            .merge(player_routes())
            .merge(match_routes())
    }
}
