//! Raw wire types for the club schedule endpoint.
//!
//! Shapes mirror the JSON payload; the builder maps them into [`GameEvent`]s.
//!
//! [`GameEvent`]: crate::event::GameEvent

use serde::Deserialize;

/// Top-level schedule document for one club and season.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    /// The club's own zone as reported by the feed. Carried through for
    /// inspection but never used for conversion; start times are rendered
    /// in the zone the user configured.
    pub club_timezone: String,
    pub games: Vec<GameRecord>,
}

/// One scheduled or completed fixture, as received.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub game_type: Option<String>,
    pub game_state: GameState,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    pub venue: Venue,
    pub away_team: TeamRef,
    pub home_team: TeamRef,
}

/// Game state as reported by the feed. Only `FUT` (not yet played) games
/// make it into the calendar; everything else is lumped together since we
/// never act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum GameState {
    #[serde(rename = "FUT")]
    Future,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Venue {
    /// Display name. The wire field is literally called "default".
    pub default: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    pub abbrev: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "clubTimezone": "America/Los_Angeles",
        "games": [
            {
                "id": 2025020123,
                "gameType": "Regular Season",
                "gameState": "FUT",
                "startTimeUTC": "2025-10-15T23:00:00Z",
                "venue": { "default": "Climate Pledge Arena" },
                "awayTeam": { "abbrev": "VAN" },
                "homeTeam": { "abbrev": "SEA" }
            },
            {
                "gameState": "OFF",
                "startTimeUTC": "2025-10-10T02:00:00Z",
                "venue": { "default": "Rogers Arena" },
                "awayTeam": { "abbrev": "SEA" },
                "homeTeam": { "abbrev": "VAN" }
            }
        ]
    }"#;

    #[test]
    fn parses_schedule_document() {
        let schedule: ScheduleResponse = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(schedule.club_timezone, "America/Los_Angeles");
        assert_eq!(schedule.games.len(), 2);

        let first = &schedule.games[0];
        assert_eq!(first.id, Some(2025020123));
        assert_eq!(first.game_state, GameState::Future);
        assert_eq!(first.home_team.abbrev, "SEA");
        assert_eq!(first.venue.default, "Climate Pledge Arena");
    }

    #[test]
    fn unknown_game_states_collapse_to_other() {
        let schedule: ScheduleResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(schedule.games[1].game_state, GameState::Other);

        let live = r#"{ "gameState": "LIVE", "startTimeUTC": "2025-10-10T02:00:00Z",
            "venue": { "default": "X" }, "awayTeam": { "abbrev": "A" },
            "homeTeam": { "abbrev": "B" } }"#;
        let game: GameRecord = serde_json::from_str(live).unwrap();
        assert_eq!(game.game_state, GameState::Other);
    }

    #[test]
    fn id_and_game_type_are_optional() {
        let schedule: ScheduleResponse = serde_json::from_str(SAMPLE).unwrap();
        let second = &schedule.games[1];
        assert_eq!(second.id, None);
        assert_eq!(second.game_type, None);
    }

    #[test]
    fn missing_venue_is_an_error() {
        let broken = r#"{ "gameState": "FUT", "startTimeUTC": "2025-10-10T02:00:00Z",
            "awayTeam": { "abbrev": "A" }, "homeTeam": { "abbrev": "B" } }"#;
        assert!(serde_json::from_str::<GameRecord>(broken).is_err());
    }
}
