// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod searchable;

pub use matcher::{match_candidates, Matcher, MatchResult, DEFAULT_MATCH_LIMIT};
pub use scoring::calculate_candidate_score;
pub use searchable::{contains_ignore_case, searchable_text};
