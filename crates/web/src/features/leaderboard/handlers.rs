use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::leaderboard::{TopScorerResponse, TotalsEntry},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Ranked totals per participant, descending", body = Vec<TotalsEntry>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(db): State<Database>) -> Result<Response, WebError> {
    let totals = services::get_totals(db.pool()).await?;

    Ok(Json(totals).into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/top",
    responses(
        (status = 200, description = "Current top scorer with crown title, or null when no scores exist", body = Option<TopScorerResponse>)
    ),
    tag = "leaderboard"
)]
pub async fn get_top_scorer(State(db): State<Database>) -> Result<Response, WebError> {
    let top = services::get_top_scorer(db.pool()).await?;

    Ok(Json(top).into_response())
}
