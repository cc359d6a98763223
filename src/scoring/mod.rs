mod engine;

pub use engine::{
    score_athlete, score_sport, DataInsufficientError, MatchResult, TOP_RECOMMENDATIONS,
};
