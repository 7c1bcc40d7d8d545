use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::Sex;

/// One row of the ranked leaderboard, descending by total.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TotalsEntry {
    pub name: String,
    pub total_points: i64,
}

/// The participant with the highest total, crowned with a title
/// matching their sex category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopScorerResponse {
    pub name: String,
    pub sex: Sex,
    pub total_points: i64,
    pub title: String,
}

impl TopScorerResponse {
    pub fn new(name: String, sex: Sex, total_points: i64) -> Self {
        Self {
            name,
            sex,
            total_points,
            title: sex.crown_title().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_scorer_title_male() {
        let top = TopScorerResponse::new("Bob".to_string(), Sex::Male, 42);
        assert_eq!(top.title, "king");
    }

    #[test]
    fn test_top_scorer_title_female() {
        let top = TopScorerResponse::new("Alice".to_string(), Sex::Female, 42);
        assert_eq!(top.title, "queen");
    }
}
