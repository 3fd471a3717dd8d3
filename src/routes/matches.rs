use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{AlmostMatchedResult, CommonGameResult, SharedGenre};
use crate::services::{genres, matching};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    /// Optional per-game genre metadata from a catalog lookup, keyed by
    /// catalog id. Supplements the name-based heuristic when present.
    #[serde(default)]
    pub game_details: HashMap<u64, Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub common_games: Vec<CommonGameResult>,
    pub almost_matched: Vec<AlmostMatchedResult>,
    pub shared_genres: Vec<SharedGenre>,
    pub friend_count: usize,
}

/// Computes matches across the currently selected friends
///
/// Results are recomputed from the live roster on every call; nothing is
/// cached or persisted.
pub async fn compute(
    State(state): State<AppState>,
    body: Option<Json<MatchRequest>>,
) -> AppResult<Json<MatchResponse>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let friends = state.roster.read().await.selected_friends();
    if friends.len() < 2 {
        return Err(AppError::InsufficientParticipants);
    }

    let common_games = matching::find_common_games(&friends);
    let almost_matched = matching::find_almost_matched_games(&friends);
    let details = (!request.game_details.is_empty()).then_some(&request.game_details);
    let shared_genres = genres::analyze_shared_genres(&friends, details);

    tracing::info!(
        friend_count = friends.len(),
        common = common_games.len(),
        near_miss = almost_matched.len(),
        genres = shared_genres.len(),
        "Match computation completed"
    );

    Ok(Json(MatchResponse {
        common_games,
        almost_matched,
        shared_genres,
        friend_count: friends.len(),
    }))
}
