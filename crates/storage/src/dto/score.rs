use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for awarding points to one or more participants.
/// All named participants receive the same points, reason and
/// timestamp; the whole batch is aborted if any name is unknown.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordScoresRequest {
    #[validate(length(min = 1, message = "At least one participant name is required"))]
    #[validate(custom(function = "validate_names"))]
    pub names: Vec<String>,

    pub points: i32,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Reason must be between 1 and 500 characters"
    ))]
    pub reason: String,
}

/// Request payload for re-inserting a deleted score event (undo).
/// Carries the values returned by the delete endpoint; the recreated
/// event gets a fresh id but keeps the original timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RestoreScoreRequest {
    pub participant_id: Uuid,

    pub points: i32,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Reason must be between 1 and 500 characters"
    ))]
    pub reason: String,

    pub scored_at: NaiveDateTime,
}

/// Score event joined with the participant's name, as shown in the
/// history view and returned by the delete endpoint as undo payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreEventResponse {
    pub score_id: Uuid,
    pub participant_id: Uuid,
    pub name: String,
    pub points: i32,
    pub reason: String,
    pub scored_at: NaiveDateTime,
}

// Validation helper
fn validate_names(names: &[String]) -> Result<(), validator::ValidationError> {
    if names.iter().any(|name| name.trim().is_empty()) {
        Err(validator::ValidationError::new("blank_name"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(names: &[&str], points: i32, reason: &str) -> RecordScoresRequest {
        RecordScoresRequest {
            names: names.iter().map(ToString::to_string).collect(),
            points,
            reason: reason.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request(&["Alice", "Bob"], 10, "chore").validate().is_ok());
    }

    #[test]
    fn test_negative_points_allowed() {
        assert!(request(&["Alice"], -5, "broke a glass").validate().is_ok());
    }

    #[test]
    fn test_empty_names_rejected() {
        assert!(request(&[], 10, "chore").validate().is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(request(&["Alice", "  "], 10, "chore").validate().is_err());
    }

    #[test]
    fn test_empty_reason_rejected() {
        assert!(request(&["Alice"], 10, "").validate().is_err());
    }

    #[test]
    fn test_restore_requires_reason() {
        let req = RestoreScoreRequest {
            participant_id: Uuid::new_v4(),
            points: 3,
            reason: String::new(),
            scored_at: chrono::Utc::now().naive_utc(),
        };
        assert!(req.validate().is_err());
    }
}
