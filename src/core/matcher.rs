use crate::core::{scoring::calculate_candidate_score, searchable::searchable_text};
use crate::models::{CandidateRecord, ScoredCandidate, ScoringWeights, SearchIntent};

/// Default number of candidates returned by a search
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Ranks a candidate directory snapshot against a recruiter's search intent
///
/// # Pipeline Stages
/// 1. Searchable text construction
/// 2. Rule scoring with match reasons
/// 3. Zero-score removal
/// 4. Stable ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score every candidate and return the best `limit` of them
    ///
    /// # Arguments
    /// * `intent` - Structured recruiter search
    /// * `candidates` - Directory snapshot, in its natural order
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult whose matches are sorted by score, highest first. Equal
    /// scores keep snapshot order.
    pub fn match_candidates(
        &self,
        intent: &SearchIntent,
        candidates: Vec<CandidateRecord>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let text = searchable_text(&candidate);
                let (score, match_reasons) =
                    calculate_candidate_score(&candidate, &text, intent, &self.weights);

                if score > 0 {
                    Some(ScoredCandidate {
                        candidate,
                        score,
                        match_reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        // `sort_by` is stable, which is what keeps ties in snapshot order
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let matched = scored.len();
        scored.truncate(limit);

        tracing::debug!(
            "Matched {} of {} candidates, returning {}",
            matched,
            total_candidates,
            scored.len()
        );

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank `candidates` against `intent` with default weights
pub fn match_candidates(
    intent: &SearchIntent,
    candidates: Vec<CandidateRecord>,
    limit: usize,
) -> Vec<ScoredCandidate> {
    Matcher::with_default_weights()
        .match_candidates(intent, candidates, limit)
        .matches
}
