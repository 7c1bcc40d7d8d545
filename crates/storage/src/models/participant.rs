use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Sex category of a participant, used only to pick the crown title
/// shown for the current leader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "sex", rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn crown_title(&self) -> &'static str {
        match self {
            Self::Male => "king",
            Self::Female => "queen",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub participant_id: Uuid,
    pub name: String,
    pub sex: Sex,
    pub created_at: chrono::NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crown_title_male() {
        assert_eq!(Sex::Male.crown_title(), "king");
    }

    #[test]
    fn test_crown_title_female() {
        assert_eq!(Sex::Female.crown_title(), "queen");
    }

    #[test]
    fn test_sex_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"male\"");
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"female\"");
    }

    #[test]
    fn test_sex_deserializes_lowercase() {
        let sex: Sex = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(sex, Sex::Female);
        assert!(serde_json::from_str::<Sex>("\"other\"").is_err());
    }
}
