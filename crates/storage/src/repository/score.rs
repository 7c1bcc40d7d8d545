use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::score::ScoreEventResponse;
use crate::error::{Result, StorageError};
use crate::models::ScoreEvent;

#[derive(FromRow)]
struct ScoreRow {
    score_id: Uuid,
    participant_id: Uuid,
    name: String,
    points: i32,
    reason: String,
    scored_at: NaiveDateTime,
}

impl From<ScoreRow> for ScoreEventResponse {
    fn from(row: ScoreRow) -> Self {
        Self {
            score_id: row.score_id,
            participant_id: row.participant_id,
            name: row.name,
            points: row.points,
            reason: row.reason,
            scored_at: row.scored_at,
        }
    }
}

pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one score event per name, all sharing the same points,
    /// reason and timestamp. Runs in a single transaction: any unknown
    /// name aborts the whole batch and nothing is inserted.
    pub async fn record(
        &self,
        names: &[String],
        points: i32,
        reason: &str,
        at: NaiveDateTime,
    ) -> Result<Vec<ScoreEvent>> {
        let mut tx = self.pool.begin().await?;
        let mut events = Vec::with_capacity(names.len());

        for name in names {
            let participant_id: Option<Uuid> =
                sqlx::query_scalar("SELECT participant_id FROM participants WHERE name = $1")
                    .bind(name)
                    .fetch_optional(&mut *tx)
                    .await?;

            let participant_id =
                participant_id.ok_or_else(|| StorageError::UnknownParticipant(name.clone()))?;

            let event = sqlx::query_as::<_, ScoreEvent>(
                r#"
                INSERT INTO scores (participant_id, points, reason, scored_at)
                VALUES ($1, $2, $3, $4)
                RETURNING score_id, participant_id, points, reason, scored_at
                "#,
            )
            .bind(participant_id)
            .bind(points)
            .bind(reason)
            .bind(at)
            .fetch_one(&mut *tx)
            .await?;

            events.push(event);
        }

        tx.commit().await?;

        Ok(events)
    }

    /// Remove one score event and return the removed values so the
    /// caller can offer undo
    pub async fn delete(&self, score_id: Uuid) -> Result<ScoreEventResponse> {
        let row = sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT s.score_id, s.participant_id, p.name, s.points, s.reason, s.scored_at
            FROM scores s
            JOIN participants p USING (participant_id)
            WHERE s.score_id = $1
            "#,
        )
        .bind(score_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        sqlx::query("DELETE FROM scores WHERE score_id = $1")
            .bind(score_id)
            .execute(self.pool)
            .await?;

        Ok(row.into())
    }

    /// Re-insert a previously deleted event under a fresh id, keeping
    /// the original participant, points, reason and timestamp
    pub async fn restore(
        &self,
        participant_id: Uuid,
        points: i32,
        reason: &str,
        scored_at: NaiveDateTime,
    ) -> Result<ScoreEvent> {
        let result = sqlx::query_as::<_, ScoreEvent>(
            r#"
            INSERT INTO scores (participant_id, points, reason, scored_at)
            VALUES ($1, $2, $3, $4)
            RETURNING score_id, participant_id, points, reason, scored_at
            "#,
        )
        .bind(participant_id)
        .bind(points)
        .bind(reason)
        .bind(scored_at)
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(event) => Ok(event),
            Err(e) => {
                let err = StorageError::from(e);
                if err.is_foreign_key_violation() {
                    Err(StorageError::ConstraintViolation(
                        "participant does not exist".to_string(),
                    ))
                } else {
                    Err(err)
                }
            }
        }
    }

    /// All score events newest-first, joined with the participant name
    pub async fn history(&self) -> Result<Vec<ScoreEventResponse>> {
        let rows = sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT s.score_id, s.participant_id, p.name, s.points, s.reason, s.scored_at
            FROM scores s
            JOIN participants p USING (participant_id)
            ORDER BY s.scored_at DESC, s.score_id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
