//! Faculty Match - candidate matching and email tracking for the academic job portal
//!
//! Ranks a candidate directory against a recruiter's structured search and
//! explains each match, and counts opens and clicks of transactional emails.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{match_candidates, Matcher, MatchResult, DEFAULT_MATCH_LIMIT};
pub use crate::models::{CandidateRecord, SearchIntent, ScoredCandidate, ScoringWeights, EmailEvent};
