use crate::AppData;
use crate::r#match::{
    create_match_action, create_player_stat_action, matches_by_league_action,
    player_stats_action, record_score_action,
};
use axum::Router;
use axum::routing::{get, post};

pub fn match_routes() -> Router<AppData> {
    Router::new()
        .route("/api/matches", post(create_match_action))
        .route("/api/matches/{match_id}/score", post(record_score_action))
        .route("/api/matches/{match_id}/stats", post(create_player_stat_action))
        .route("/api/matches/{match_id}/stats", get(player_stats_action))
        .route("/api/leagues/{league_id}/matches", get(matches_by_league_action))
}
