use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{delete_score, list_history, record_scores, restore_score};
use crate::middleware::auth::{SharedPassword, require_auth};

pub fn routes(password: SharedPassword) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(record_scores))
        .route("/:id", delete(delete_score))
        .route("/restore", post(restore_score))
        .route_layer(middleware::from_fn_with_state(password, require_auth));

    Router::new().route("/", get(list_history)).merge(protected)
}
