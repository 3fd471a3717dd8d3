use serde::{Deserialize, Serialize};

/// A game owned by every selected friend, with aggregated playtime
///
/// Derived per request from the current selection and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommonGameResult {
    pub app_id: u64,
    pub name: String,
    /// Playtime summed across every contributing friend
    pub total_playtime_minutes: u64,
    /// `round(total / friend_count)`
    pub average_playtime_minutes: u64,
    pub owner_count: usize,
}

/// A game owned by all but exactly one selected friend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlmostMatchedResult {
    pub app_id: u64,
    pub name: String,
    /// Playtime of the first-encountered owning record, used for ordering
    pub playtime_minutes: u32,
    /// Display names of friends who own the game, in roster order
    pub owners: Vec<String>,
    /// Display names of friends who do not own it
    pub missing_owners: Vec<String>,
    /// Always `total friends - 1` by construction
    pub owner_count: usize,
}

/// A genre tag present in every selected friend's library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharedGenre {
    pub genre: String,
    /// Number of tagged games across all supplied libraries (not friends)
    pub count: usize,
    /// Display names of friends with at least one game carrying this tag
    pub friends: Vec<String>,
}
