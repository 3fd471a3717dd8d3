use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::error::{AppError, AppResult};
use crate::models::{
    CommonGameResult, Friend, RecommendationRequest, RecommendationResult, SharedGenre,
    SuggestionResponse,
};

/// The suggestion service runs the group context through a language model
/// with a fixed prompt budget, so only the strongest signals are forwarded.
pub const MAX_COMMON_GAMES: usize = 10;
pub const MAX_SHARED_GENRES: usize = 5;

/// Assembles the capped outbound payload from matching output
///
/// Only name and genre strings and friend display names cross this boundary;
/// playtime and ownership detail stay behind it.
pub fn build_request(
    friends: &[Friend],
    common_games: &[CommonGameResult],
    shared_genres: &[SharedGenre],
) -> RecommendationRequest {
    RecommendationRequest {
        common_games: common_games
            .iter()
            .take(MAX_COMMON_GAMES)
            .map(|game| game.name.clone())
            .collect(),
        shared_genres: shared_genres
            .iter()
            .take(MAX_SHARED_GENRES)
            .map(|genre| genre.genre.clone())
            .collect(),
        friend_names: friends
            .iter()
            .map(|friend| friend.display_name.clone())
            .collect(),
    }
}

/// Normalizes the raw service reply for presentation
///
/// Renaming only, no reinterpretation: order is preserved and every wire
/// entry yields exactly one result. A reply flagged unsuccessful surfaces
/// the upstream message unchanged.
pub fn normalize_response(raw: SuggestionResponse) -> AppResult<Vec<RecommendationResult>> {
    if !raw.success {
        let message = raw
            .error
            .unwrap_or_else(|| "suggestion service reported failure".to_string());
        return Err(AppError::MalformedResponse(message));
    }

    Ok(raw
        .recommendations
        .into_iter()
        .map(RecommendationResult::from)
        .collect())
}

/// External AI suggestion backend
///
/// The engine only shapes the request and normalizes the reply; retry and
/// timeout policy belong to the caller.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Requests game suggestions for the assembled group context
    async fn suggest(&self, request: &RecommendationRequest)
        -> AppResult<Vec<RecommendationResult>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// HTTP client for the remote suggestion service
#[derive(Clone)]
pub struct HttpSuggestionProvider {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl HttpSuggestionProvider {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl SuggestionProvider for HttpSuggestionProvider {
    async fn suggest(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<Vec<RecommendationResult>> {
        let url = format!("{}/api/recommendations", self.api_url);

        let mut http_request = self.http_client.post(&url).json(request);
        if let Some(key) = &self.api_key {
            http_request = http_request.bearer_auth(key);
        }

        let response = http_request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Suggestion service returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        let raw: SuggestionResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize suggestion response"
            );
            AppError::MalformedResponse(format!("unexpected response shape: {}", e))
        })?;

        let results = normalize_response(raw)?;

        tracing::info!(
            suggestions = results.len(),
            provider = self.name(),
            "Suggestions fetched"
        );

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SuggestedGame;

    fn common_game(name: &str) -> CommonGameResult {
        CommonGameResult {
            app_id: 1,
            name: name.to_string(),
            total_playtime_minutes: 100,
            average_playtime_minutes: 50,
            owner_count: 2,
        }
    }

    fn shared_genre(genre: &str) -> SharedGenre {
        SharedGenre {
            genre: genre.to_string(),
            count: 1,
            friends: vec!["Alice".to_string(), "Bob".to_string()],
        }
    }

    fn suggestion(name: &str) -> SuggestedGame {
        SuggestedGame {
            name: name.to_string(),
            price: "Free to Play".to_string(),
            overview: "A game.".to_string(),
            reason: "Because.".to_string(),
            player_count: "2-8 players".to_string(),
            tags: vec!["Co-op".to_string()],
        }
    }

    #[test]
    fn test_build_request_caps_games_and_genres() {
        let friends = vec![
            Friend::new("a".into(), "Alice".into(), String::new(), Vec::new()),
            Friend::new("b".into(), "Bob".into(), String::new(), Vec::new()),
        ];
        let games: Vec<CommonGameResult> =
            (0..25).map(|i| common_game(&format!("Game {i}"))).collect();
        let genres: Vec<SharedGenre> =
            (0..9).map(|i| shared_genre(&format!("Genre {i}"))).collect();

        let request = build_request(&friends, &games, &genres);

        assert_eq!(request.common_games.len(), MAX_COMMON_GAMES);
        assert_eq!(request.shared_genres.len(), MAX_SHARED_GENRES);
        // Caps keep the strongest-first ordering from matching
        assert_eq!(request.common_games[0], "Game 0");
        assert_eq!(request.shared_genres[4], "Genre 4");
        assert_eq!(request.friend_names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_build_request_below_caps_unchanged() {
        let friends = vec![Friend::new("a".into(), "Alice".into(), String::new(), Vec::new())];
        let games = vec![common_game("Portal 2")];
        let request = build_request(&friends, &games, &[]);

        assert_eq!(request.common_games, vec!["Portal 2"]);
        assert!(request.shared_genres.is_empty());
    }

    #[test]
    fn test_normalize_preserves_order() {
        let raw = SuggestionResponse {
            success: true,
            recommendations: vec![suggestion("First"), suggestion("Second")],
            error: None,
        };

        let results = normalize_response(raw).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "First");
        assert_eq!(results[1].name, "Second");
    }

    #[test]
    fn test_normalize_failure_carries_upstream_message() {
        let raw = SuggestionResponse {
            success: false,
            recommendations: Vec::new(),
            error: Some("model overloaded".to_string()),
        };

        match normalize_response(raw) {
            Err(AppError::MalformedResponse(message)) => {
                assert_eq!(message, "model overloaded");
            }
            other => panic!("expected MalformedResponse, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_normalize_failure_without_message() {
        let raw = SuggestionResponse {
            success: false,
            recommendations: Vec::new(),
            error: None,
        };

        assert!(matches!(
            normalize_response(raw),
            Err(AppError::MalformedResponse(_))
        ));
    }
}
