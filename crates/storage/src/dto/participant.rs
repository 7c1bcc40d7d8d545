use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Sex;

/// Response containing basic participant information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub participant_id: Uuid,
    pub name: String,
    pub sex: Sex,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Participant> for ParticipantResponse {
    fn from(participant: crate::models::Participant) -> Self {
        Self {
            participant_id: participant.participant_id,
            name: participant.name,
            sex: participant.sex,
            created_at: participant.created_at,
        }
    }
}

/// One entry of the seed roster, parsed from the `PARTICIPANTS`
/// environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedParticipant {
    pub name: String,
    pub sex: Sex,
}

impl SeedParticipant {
    /// Parses a comma-separated roster of `name:sex` entries,
    /// e.g. `Alice:female,Bob:male`. Empty entries are skipped,
    /// surrounding whitespace is ignored.
    pub fn parse_roster(raw: &str) -> Result<Vec<SeedParticipant>, String> {
        let mut roster = Vec::new();

        for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (name, sex) = entry
                .rsplit_once(':')
                .ok_or_else(|| format!("malformed roster entry '{entry}', expected name:sex"))?;

            let name = name.trim();
            if name.is_empty() {
                return Err(format!("missing name in roster entry '{entry}'"));
            }

            let sex = match sex.trim() {
                "male" => Sex::Male,
                "female" => Sex::Female,
                other => return Err(format!("unknown sex '{other}' for participant '{name}'")),
            };

            roster.push(SeedParticipant {
                name: name.to_string(),
                sex,
            });
        }

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster_valid() {
        let roster = SeedParticipant::parse_roster("Alice:female,Bob:male").unwrap();
        assert_eq!(
            roster,
            vec![
                SeedParticipant {
                    name: "Alice".to_string(),
                    sex: Sex::Female,
                },
                SeedParticipant {
                    name: "Bob".to_string(),
                    sex: Sex::Male,
                },
            ]
        );
    }

    #[test]
    fn test_parse_roster_trims_whitespace() {
        let roster = SeedParticipant::parse_roster(" Alice : female , Bob : male ").unwrap();
        assert_eq!(roster[0].name, "Alice");
        assert_eq!(roster[1].name, "Bob");
    }

    #[test]
    fn test_parse_roster_skips_empty_entries() {
        let roster = SeedParticipant::parse_roster("Alice:female,,Bob:male,").unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_parse_roster_rejects_unknown_sex() {
        let err = SeedParticipant::parse_roster("Alice:unknown").unwrap_err();
        assert!(err.contains("unknown sex"));
    }

    #[test]
    fn test_parse_roster_rejects_missing_name() {
        assert!(SeedParticipant::parse_roster(":male").is_err());
    }

    #[test]
    fn test_parse_roster_rejects_entry_without_sex() {
        assert!(SeedParticipant::parse_roster("Alice").is_err());
    }

    #[test]
    fn test_parse_roster_empty_input() {
        assert_eq!(SeedParticipant::parse_roster("").unwrap(), vec![]);
    }
}
