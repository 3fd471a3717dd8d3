use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::RecommendationResult;
use crate::services::{genres, matching, suggestions};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RecommendationResult>,
}

/// Fetches AI suggestions for the currently selected friends
///
/// Assembles the capped request from fresh matching output and forwards
/// provider errors to the caller unchanged.
pub async fn recommend(
    State(state): State<AppState>,
) -> AppResult<Json<RecommendationResponse>> {
    let friends = state.roster.read().await.selected_friends();
    if friends.len() < 2 {
        return Err(AppError::InsufficientParticipants);
    }

    let common_games = matching::find_common_games(&friends);
    let shared_genres = genres::analyze_shared_genres(&friends, None);
    let request = suggestions::build_request(&friends, &common_games, &shared_genres);

    tracing::info!(
        friend_count = friends.len(),
        games = request.common_games.len(),
        genres = request.shared_genres.len(),
        provider = state.suggestions.name(),
        "Requesting suggestions"
    );

    let recommendations = state.suggestions.suggest(&request).await?;

    Ok(Json(RecommendationResponse { recommendations }))
}
