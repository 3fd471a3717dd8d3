use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single owned game as reported by the profile service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Catalog identifier, unique across the whole game catalog
    pub app_id: u64,
    /// Display name of the game
    pub name: String,
    /// Total recorded playtime. The profile service is not fully trusted,
    /// so missing or negative values are normalized to 0.
    #[serde(default, deserialize_with = "clamped_playtime")]
    pub playtime_minutes: u32,
}

fn clamped_playtime<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or(0);
    Ok(raw.clamp(0, u32::MAX as i64) as u32)
}

/// A profile whose owned-game library participates in matching
///
/// The library is a snapshot captured when the friend was added; it is not
/// refreshed automatically. Game order follows the source order and carries
/// no meaning of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    /// Canonical account identifier, unique within the roster
    pub id: String,
    pub display_name: String,
    pub avatar_url: String,
    pub games: Vec<Game>,
    /// When the library snapshot was taken
    pub added_at: DateTime<Utc>,
}

impl Friend {
    /// Creates a friend from resolved profile data, timestamping the snapshot
    pub fn new(id: String, display_name: String, avatar_url: String, games: Vec<Game>) -> Self {
        Self {
            id,
            display_name,
            avatar_url,
            games,
            added_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_deserialization_camel_case() {
        let json = r#"{
            "appId": 620,
            "name": "Portal 2",
            "playtimeMinutes": 1200
        }"#;

        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.app_id, 620);
        assert_eq!(game.name, "Portal 2");
        assert_eq!(game.playtime_minutes, 1200);
    }

    #[test]
    fn test_negative_playtime_clamped_to_zero() {
        let json = r#"{ "appId": 620, "name": "Portal 2", "playtimeMinutes": -42 }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.playtime_minutes, 0);
    }

    #[test]
    fn test_missing_playtime_defaults_to_zero() {
        let json = r#"{ "appId": 620, "name": "Portal 2" }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.playtime_minutes, 0);
    }

    #[test]
    fn test_new_friend_snapshots_library() {
        let games = vec![Game {
            app_id: 220,
            name: "Half-Life 2".to_string(),
            playtime_minutes: 90,
        }];
        let friend = Friend::new(
            "76561198000000001".to_string(),
            "Alice".to_string(),
            "https://avatars.example/alice.png".to_string(),
            games,
        );
        assert_eq!(friend.display_name, "Alice");
        assert_eq!(friend.games.len(), 1);
    }
}
