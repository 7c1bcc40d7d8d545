use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_leaderboard, get_top_scorer};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(get_leaderboard))
        .route("/top", get(get_top_scorer))
}
