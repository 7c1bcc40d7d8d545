use chrono::NaiveDateTime;
use sqlx::PgPool;
use storage::{
    dto::score::{RecordScoresRequest, RestoreScoreRequest, ScoreEventResponse},
    error::Result,
    models::ScoreEvent,
    repository::score::ScoreRepository,
};
use uuid::Uuid;

/// Record one score event per distinct name; the whole batch is
/// aborted if any name is unknown
pub async fn record_scores(
    pool: &PgPool,
    request: &RecordScoresRequest,
    at: NaiveDateTime,
) -> Result<Vec<ScoreEvent>> {
    // The names act as a set: repeating a name must not double-award.
    let mut names: Vec<String> = Vec::with_capacity(request.names.len());
    for name in &request.names {
        if !names.contains(name) {
            names.push(name.clone());
        }
    }

    let repo = ScoreRepository::new(pool);
    repo.record(&names, request.points, &request.reason, at).await
}

/// Delete one score event, returning the removed values
pub async fn delete_score(pool: &PgPool, score_id: Uuid) -> Result<ScoreEventResponse> {
    let repo = ScoreRepository::new(pool);
    repo.delete(score_id).await
}

/// Re-insert a previously deleted event (undo)
pub async fn restore_score(pool: &PgPool, request: &RestoreScoreRequest) -> Result<ScoreEvent> {
    let repo = ScoreRepository::new(pool);
    repo.restore(
        request.participant_id,
        request.points,
        &request.reason,
        request.scored_at,
    )
    .await
}

/// Full score history newest-first with participant names
pub async fn list_history(pool: &PgPool) -> Result<Vec<ScoreEventResponse>> {
    let repo = ScoreRepository::new(pool);
    repo.history().await
}
