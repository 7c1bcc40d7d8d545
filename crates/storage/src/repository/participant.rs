use sqlx::PgPool;

use crate::dto::participant::SeedParticipant;
use crate::error::Result;
use crate::models::Participant;

pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all participants, alphabetically
    pub async fn list(&self) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, name, sex, created_at
            FROM participants
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Insert-if-absent by unique name; idempotent. Returns the number
    /// of rows actually inserted (already-seeded names are skipped).
    pub async fn seed(&self, roster: &[SeedParticipant]) -> Result<u64> {
        let mut inserted = 0;

        for participant in roster {
            inserted += sqlx::query(
                r#"
                INSERT INTO participants (name, sex)
                VALUES ($1, $2)
                ON CONFLICT (name) DO NOTHING
                "#,
            )
            .bind(&participant.name)
            .bind(participant.sex)
            .execute(self.pool)
            .await?
            .rows_affected();
        }

        Ok(inserted)
    }
}
