mod friend;
mod recommendation;
mod results;

pub use friend::{Friend, Game};
pub use recommendation::{
    RecommendationRequest, RecommendationResult, SuggestedGame, SuggestionResponse,
};
pub use results::{AlmostMatchedResult, CommonGameResult, SharedGenre};
