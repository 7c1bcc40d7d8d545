use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One point-award or deduction record. Deleting an event and restoring
/// it recreates the same values under a fresh id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScoreEvent {
    pub score_id: Uuid,
    pub participant_id: Uuid,
    pub points: i32,
    pub reason: String,
    pub scored_at: chrono::NaiveDateTime,
}
