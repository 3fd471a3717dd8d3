use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{Friend, Game};
use crate::state::AppState;

/// A resolved profile as supplied by the profile service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFriendRequest {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: String,
    /// Owned-game library; empty means a private or empty library
    #[serde(default)]
    pub games: Vec<Game>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendSummary {
    pub id: String,
    pub display_name: String,
    pub avatar_url: String,
    pub game_count: usize,
    pub selected: bool,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub selected: bool,
}

/// Lists the roster with selection flags
pub async fn list(State(state): State<AppState>) -> Json<Vec<FriendSummary>> {
    let roster = state.roster.read().await;
    let summaries = roster
        .entries()
        .iter()
        .map(|entry| FriendSummary {
            id: entry.friend.id.clone(),
            display_name: entry.friend.display_name.clone(),
            avatar_url: entry.friend.avatar_url.clone(),
            game_count: entry.friend.games.len(),
            selected: entry.selected,
        })
        .collect();
    Json(summaries)
}

/// Adds a resolved friend to the roster
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddFriendRequest>,
) -> AppResult<(StatusCode, Json<FriendSummary>)> {
    let friend = Friend::new(
        request.id,
        request.display_name,
        request.avatar_url,
        request.games,
    );

    let summary = FriendSummary {
        id: friend.id.clone(),
        display_name: friend.display_name.clone(),
        avatar_url: friend.avatar_url.clone(),
        game_count: friend.games.len(),
        selected: true,
    };

    let mut roster = state.roster.write().await;
    roster.add(friend)?;

    tracing::info!(
        friend_id = %summary.id,
        games = summary.game_count,
        roster_size = roster.entries().len(),
        "Friend added"
    );

    Ok((StatusCode::CREATED, Json(summary)))
}

/// Removes a friend from the roster
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.roster.write().await.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Sets whether a friend participates in matching
pub async fn set_selection(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SelectionRequest>,
) -> AppResult<StatusCode> {
    state
        .roster
        .write()
        .await
        .set_selected(&id, request.selected)?;
    Ok(StatusCode::OK)
}
