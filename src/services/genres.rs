use std::collections::{HashMap, HashSet};

use crate::models::{Friend, SharedGenre};

/// Keyword table backing heuristic genre inference
///
/// Matching is case-insensitive substring search over the game name. Entries
/// are checked in order, which fixes the output order of `infer_genres`.
const GENRE_KEYWORDS: &[(&str, &[&str])] = &[
    ("RPG", &["rpg", "role-playing", "fantasy", "dragon", "sword", "souls", "witcher"]),
    ("FPS", &["counter-strike", "call of duty", "shooter", "doom", "quake", "battlefield"]),
    ("Strategy", &["civilization", "total war", "strategy", "tactics", "crusader", "stellaris"]),
    ("Survival", &["survival", "rust", "forest", "raft", "valheim", "ark"]),
    ("Co-op", &["portal", "left 4 dead", "deep rock", "overcooked", "it takes two", "payday"]),
    ("Racing", &["racing", "forza", "dirt rally", "wreckfest", "kart"]),
    ("Sports", &["fifa", "nba", "football", "rocket league", "golf"]),
    ("Simulation", &["simulator", "tycoon", "farming", "cities", "factorio"]),
    ("Horror", &["dead", "horror", "resident evil", "outlast", "phasmophobia"]),
    ("Sandbox", &["minecraft", "terraria", "garry", "sandbox", "craft"]),
];

/// Infers genre tags for a game from its display name
///
/// A name may match zero, one, or several genres; all matches are returned.
pub fn infer_genres(game_name: &str) -> Vec<&'static str> {
    let lowered = game_name.to_lowercase();
    GENRE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(genre, _)| *genre)
        .collect()
}

/// Computes the genres represented in every supplied friend's library
///
/// Each game contributes its inferred tags plus any catalog metadata supplied
/// for its `app_id`; the two sources merge into one tag set per game. `count`
/// is game-level: every tagged game occurrence across all libraries
/// increments it, so a game two friends both own counts twice. A genre makes
/// the cut only when every friend has at least one game carrying it.
///
/// Ordering is descending by `count` with stable first-seen ties.
pub fn analyze_shared_genres(
    friends: &[Friend],
    game_details: Option<&HashMap<u64, Vec<String>>>,
) -> Vec<SharedGenre> {
    if friends.is_empty() {
        return Vec::new();
    }

    struct Tally {
        count: usize,
        // Roster positions, not display names: names are not unique
        participants: Vec<usize>,
    }

    let mut order: Vec<String> = Vec::new();
    let mut tallies: HashMap<String, Tally> = HashMap::new();

    for (index, friend) in friends.iter().enumerate() {
        let mut seen_in_library = HashSet::new();
        for game in &friend.games {
            if !seen_in_library.insert(game.app_id) {
                continue;
            }

            let mut tags: Vec<String> = infer_genres(&game.name)
                .into_iter()
                .map(str::to_string)
                .collect();
            if let Some(details) = game_details {
                if let Some(extra) = details.get(&game.app_id) {
                    for tag in extra {
                        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                            tags.push(tag.clone());
                        }
                    }
                }
            }

            for tag in tags {
                let tally = tallies.entry(tag.clone()).or_insert_with(|| {
                    order.push(tag);
                    Tally {
                        count: 0,
                        participants: Vec::new(),
                    }
                });
                tally.count += 1;
                if !tally.participants.contains(&index) {
                    tally.participants.push(index);
                }
            }
        }
    }

    let mut results: Vec<SharedGenre> = order
        .into_iter()
        .filter_map(|genre| {
            let tally = tallies.remove(&genre)?;
            if tally.participants.len() != friends.len() {
                return None;
            }
            Some(SharedGenre {
                genre,
                count: tally.count,
                friends: tally
                    .participants
                    .iter()
                    .map(|&index| friends[index].display_name.clone())
                    .collect(),
            })
        })
        .collect();

    results.sort_by(|a, b| b.count.cmp(&a.count));
    results
}
