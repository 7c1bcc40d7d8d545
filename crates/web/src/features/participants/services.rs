use sqlx::PgPool;
use storage::{error::Result, models::Participant, repository::participant::ParticipantRepository};

/// List all participants
pub async fn list_participants(pool: &PgPool) -> Result<Vec<Participant>> {
    let repo = ParticipantRepository::new(pool);
    repo.list().await
}
