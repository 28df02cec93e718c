use league_core::league::{LeagueMatch, Season};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SnapshotEntity {
    #[serde(default)]
    pub seasons: Vec<SeasonEntity>,
    #[serde(default)]
    pub matches: Vec<MatchEntity>,
}

#[derive(Debug, Deserialize)]
pub struct SeasonEntity {
    pub id: u32,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchEntity {
    pub id: u32,
    pub season_id: u32,
    pub round: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u16,
    pub away_goals: u16,
    #[serde(default)]
    pub overtime: bool,
    #[serde(default)]
    pub is_playoff: bool,
}

impl From<SeasonEntity> for Season {
    fn from(entity: SeasonEntity) -> Self {
        Season::new(entity.id, entity.label)
    }
}

impl From<MatchEntity> for LeagueMatch {
    fn from(entity: MatchEntity) -> Self {
        LeagueMatch {
            id: entity.id,
            home_team: entity.home_team.trim().to_uppercase(),
            away_team: entity.away_team.trim().to_uppercase(),
            home_goals: entity.home_goals,
            away_goals: entity.away_goals,
            overtime: entity.overtime,
            round: entity.round,
            season: entity.season_id,
            is_playoff: entity.is_playoff,
        }
    }
}

pub struct SnapshotLoader;

impl SnapshotLoader {
    pub fn parse(json: &str) -> Result<SnapshotEntity, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn parse_slice(bytes: &[u8]) -> Result<SnapshotEntity, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot() {
        let json = r#"{
            "seasons": [{ "id": 1, "label": "2024" }],
            "matches": [
                { "id": 7, "season_id": 1, "round": 2, "home_team": " fin", "away_team": "SLO",
                  "home_goals": 3, "away_goals": 2, "overtime": true, "venue": "ignored" }
            ]
        }"#;

        let entity = SnapshotLoader::parse(json).unwrap();

        assert_eq!(entity.seasons.len(), 1);
        assert_eq!(entity.matches.len(), 1);

        let stored: LeagueMatch = entity.matches.into_iter().next().unwrap().into();
        assert_eq!(stored.home_team, "FIN");
        assert_eq!(stored.season, 1);
        assert!(stored.overtime);
        assert!(!stored.is_playoff);
    }

    #[test]
    fn test_parse_rejects_negative_goals() {
        let json = r#"{ "matches": [
            { "id": 1, "season_id": 1, "round": 1, "home_team": "FIN", "away_team": "SLO",
              "home_goals": -1, "away_goals": 2 }
        ] }"#;

        assert!(SnapshotLoader::parse(json).is_err());
    }

    #[test]
    fn test_parse_empty_snapshot() {
        let entity = SnapshotLoader::parse("{}").unwrap();

        assert!(entity.seasons.is_empty());
        assert!(entity.matches.is_empty());
    }
}
