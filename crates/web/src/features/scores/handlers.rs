use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::score::{RecordScoresRequest, RestoreScoreRequest, ScoreEventResponse},
    models::ScoreEvent,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/scores",
    responses(
        (status = 200, description = "Full score history newest-first", body = Vec<ScoreEventResponse>)
    ),
    tag = "scores"
)]
pub async fn list_history(State(db): State<Database>) -> Result<Response, WebError> {
    let history = services::list_history(db.pool()).await?;

    Ok(Json(history).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = RecordScoresRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Score events created for every named participant", body = Vec<ScoreEvent>),
        (status = 400, description = "Validation error or unknown participant name"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "scores"
)]
pub async fn record_scores(
    State(db): State<Database>,
    Json(req): Json<RecordScoresRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let at = Utc::now().naive_utc();
    let events = services::record_scores(db.pool(), &req, at).await?;

    Ok((StatusCode::CREATED, Json(events)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/scores/{id}",
    params(
        ("id" = Uuid, Path, description = "Score event id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Score event deleted; body carries the removed values for undo", body = ScoreEventResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Score event not found")
    ),
    tag = "scores"
)]
pub async fn delete_score(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let removed = services::delete_score(db.pool(), id).await?;

    Ok(Json(removed).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scores/restore",
    request_body = RestoreScoreRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Score event recreated with a fresh id", body = ScoreEvent),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Referenced participant does not exist")
    ),
    tag = "scores"
)]
pub async fn restore_score(
    State(db): State<Database>,
    Json(req): Json<RestoreScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::restore_score(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}
