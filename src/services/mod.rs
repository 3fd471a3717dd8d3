pub mod genres;
pub mod matching;
pub mod suggestions;
