use serde::{Deserialize, Serialize};

/// Outbound payload for the AI suggestion service
///
/// Wire contract is snake_case; the lists are capped by the request builder
/// before this value is constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub common_games: Vec<String>,
    pub shared_genres: Vec<String>,
    pub friend_names: Vec<String>,
}

/// Raw reply from the suggestion service
///
/// `recommendations` is required; only `error` may be omitted. A reply
/// missing the array fails deserialization rather than passing as an empty
/// success.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionResponse {
    pub success: bool,
    pub recommendations: Vec<SuggestedGame>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One suggestion as it appears on the wire
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SuggestedGame {
    pub name: String,
    pub price: String,
    pub overview: String,
    pub reason: String,
    pub player_count: String,
    pub tags: Vec<String>,
}

/// One suggestion normalized for presentation
///
/// Field renaming only: wire `player_count` becomes `playerCount`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub name: String,
    pub price: String,
    pub overview: String,
    pub reason: String,
    pub player_count: String,
    pub tags: Vec<String>,
}

impl From<SuggestedGame> for RecommendationResult {
    fn from(raw: SuggestedGame) -> Self {
        Self {
            name: raw.name,
            price: raw.price,
            overview: raw.overview,
            reason: raw.reason,
            player_count: raw.player_count,
            tags: raw.tags,
        }
    }
}
