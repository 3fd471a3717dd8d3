use std::collections::{HashMap, HashSet};

use crate::models::{AlmostMatchedResult, CommonGameResult, Friend, Game};

/// Computes the games owned by every supplied friend
///
/// With no friends the result is empty; with one friend the whole library is
/// returned with an owner count of 1. Otherwise the result is the `app_id`
/// intersection across all libraries, with playtime summed over every owner
/// and the name taken from the first friend's record (the catalog id is
/// globally unique, so all records refer to the same game).
///
/// Ordering is descending by total playtime; ties keep the encounter order
/// of the first friend's library, so repeated calls are deterministic.
pub fn find_common_games(friends: &[Friend]) -> Vec<CommonGameResult> {
    if friends.is_empty() {
        return Vec::new();
    }

    let libraries: Vec<HashMap<u64, u32>> = friends.iter().map(library_index).collect();

    let mut seen = HashSet::new();
    let mut results: Vec<CommonGameResult> = friends[0]
        .games
        .iter()
        .filter(|game| seen.insert(game.app_id))
        .filter(|game| libraries[1..].iter().all(|lib| lib.contains_key(&game.app_id)))
        .map(|game| {
            let total: u64 = libraries
                .iter()
                .map(|lib| u64::from(lib[&game.app_id]))
                .sum();
            let average = (total as f64 / friends.len() as f64).round() as u64;

            CommonGameResult {
                app_id: game.app_id,
                name: game.name.clone(),
                total_playtime_minutes: total,
                average_playtime_minutes: average,
                owner_count: friends.len(),
            }
        })
        .collect();

    results.sort_by(|a, b| b.total_playtime_minutes.cmp(&a.total_playtime_minutes));
    results
}

/// Computes the games owned by all but exactly one friend
///
/// Meaningless below 3 participants (the complement would be the whole group
/// or a single owner), so smaller inputs yield an empty result. Each game is
/// represented by its first-encountered owning record; output is descending
/// by that record's playtime with stable ties.
pub fn find_almost_matched_games(friends: &[Friend]) -> Vec<AlmostMatchedResult> {
    if friends.len() < 3 {
        return Vec::new();
    }

    struct Candidate {
        game: Game,
        // Roster positions, not display names: names are not unique
        owner_indices: Vec<usize>,
    }

    // First-encounter order across all libraries keeps ties deterministic.
    let mut order: Vec<u64> = Vec::new();
    let mut candidates: HashMap<u64, Candidate> = HashMap::new();

    for (index, friend) in friends.iter().enumerate() {
        let mut seen_in_library = HashSet::new();
        for game in &friend.games {
            if !seen_in_library.insert(game.app_id) {
                continue;
            }
            let candidate = candidates.entry(game.app_id).or_insert_with(|| {
                order.push(game.app_id);
                Candidate {
                    game: game.clone(),
                    owner_indices: Vec::new(),
                }
            });
            candidate.owner_indices.push(index);
        }
    }

    let mut results: Vec<AlmostMatchedResult> = order
        .into_iter()
        .filter_map(|app_id| {
            let candidate = candidates.remove(&app_id)?;
            if candidate.owner_indices.len() != friends.len() - 1 {
                return None;
            }

            let owners: Vec<String> = candidate
                .owner_indices
                .iter()
                .map(|&index| friends[index].display_name.clone())
                .collect();
            let missing_owners: Vec<String> = (0..friends.len())
                .filter(|index| !candidate.owner_indices.contains(index))
                .map(|index| friends[index].display_name.clone())
                .collect();

            Some(AlmostMatchedResult {
                app_id: candidate.game.app_id,
                name: candidate.game.name,
                playtime_minutes: candidate.game.playtime_minutes,
                owner_count: owners.len(),
                owners,
                missing_owners,
            })
        })
        .collect();

    results.sort_by(|a, b| b.playtime_minutes.cmp(&a.playtime_minutes));
    results
}

/// Indexes one library by catalog id, keeping the first record on duplicates
fn library_index(friend: &Friend) -> HashMap<u64, u32> {
    let mut index = HashMap::with_capacity(friend.games.len());
    for game in &friend.games {
        index.entry(game.app_id).or_insert(game.playtime_minutes);
    }
    index
}
