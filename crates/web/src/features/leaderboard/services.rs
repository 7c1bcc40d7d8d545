use sqlx::PgPool;
use storage::{
    dto::leaderboard::{TopScorerResponse, TotalsEntry},
    error::Result,
    repository::leaderboard::LeaderboardRepository,
};

/// Ranked totals per participant, descending
pub async fn get_totals(pool: &PgPool) -> Result<Vec<TotalsEntry>> {
    let repo = LeaderboardRepository::new(pool);
    repo.totals().await
}

/// Current top scorer, or `None` when no scores exist
pub async fn get_top_scorer(pool: &PgPool) -> Result<Option<TopScorerResponse>> {
    let repo = LeaderboardRepository::new(pool);
    repo.top_scorer().await
}
