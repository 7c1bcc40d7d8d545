use sqlx::{FromRow, PgPool};

use crate::dto::leaderboard::{TopScorerResponse, TotalsEntry};
use crate::error::Result;
use crate::models::Sex;

#[derive(FromRow)]
struct TopScorerRow {
    name: String,
    sex: Sex,
    total_points: i64,
}

pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Total points per participant, descending. Participants without
    /// any score event are excluded; tie order is unspecified.
    pub async fn totals(&self) -> Result<Vec<TotalsEntry>> {
        let entries = sqlx::query_as::<_, TotalsEntry>(
            r#"
            SELECT p.name, SUM(s.points)::BIGINT AS total_points
            FROM scores s
            JOIN participants p USING (participant_id)
            GROUP BY p.name
            ORDER BY total_points DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// First row of the totals ordering, or `None` when no score
    /// events exist yet
    pub async fn top_scorer(&self) -> Result<Option<TopScorerResponse>> {
        let row = sqlx::query_as::<_, TopScorerRow>(
            r#"
            SELECT p.name, p.sex, SUM(s.points)::BIGINT AS total_points
            FROM scores s
            JOIN participants p USING (participant_id)
            GROUP BY p.name, p.sex
            ORDER BY total_points DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| TopScorerResponse::new(r.name, r.sex, r.total_points)))
    }
}
