use serde::{Deserialize, Serialize};

use crate::models::domain::{ScoredCandidate, SearchIntent};

/// Response for the candidate search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCandidatesResponse {
    pub candidates: Vec<ScoredCandidate>,
    pub message: String,
    #[serde(rename = "searchCriteria")]
    pub search_criteria: SearchIntent,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Registered tracked message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterMessageResponse {
    pub id: String,
    #[serde(rename = "pixelUrl")]
    pub pixel_url: String,
    #[serde(rename = "clickUrlTemplate")]
    pub click_url_template: String,
}
