//! One-shot seeding binary: inserts the participant roster from the
//! `PARTICIPANTS` environment variable. Idempotent; already-seeded
//! names are left untouched.

use anyhow::Context;
use storage::{
    Database, dto::participant::SeedParticipant, repository::participant::ParticipantRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("Cannot load DATABASE_URL env variable")?;
    let raw_roster =
        std::env::var("PARTICIPANTS").context("Cannot load PARTICIPANTS env variable")?;

    let roster = SeedParticipant::parse_roster(&raw_roster)
        .map_err(anyhow::Error::msg)
        .context("Invalid PARTICIPANTS roster")?;
    if roster.is_empty() {
        anyhow::bail!("PARTICIPANTS roster is empty");
    }

    let db = Database::new(&database_url)
        .await
        .context("Failed to initialize database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    let repo = ParticipantRepository::new(db.pool());
    let inserted = repo.seed(&roster).await?;

    tracing::info!(
        "Seeded {} new participant(s), {} already present",
        inserted,
        roster.len() as u64 - inserted
    );

    Ok(())
}
