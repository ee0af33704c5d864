// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateRecord, SearchIntent, ScoredCandidate, ScoringWeights, EmailEvent, EmailTrackingStats};
pub use requests::{SearchCandidatesRequest, TrackEventQuery, TrackingStatsQuery, RegisterMessageRequest};
pub use responses::{SearchCandidatesResponse, HealthResponse, ErrorResponse, RegisterMessageResponse};
