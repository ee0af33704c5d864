use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::SearchIntent;

/// Request to rank the candidate directory against a structured intent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchCandidatesRequest {
    #[serde(alias = "searchCriteria", default)]
    pub intent: SearchIntent,
    #[validate(range(min = 1, max = 50))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query string of the email tracking endpoint
///
/// Every field is optional at the extractor level so that missing
/// parameters surface as our own 400 body instead of an extractor error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackEventQuery {
    pub id: Option<String>,
    pub event: Option<String>,
    pub url: Option<String>,
}

/// Query string of the tracking stats endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackingStatsQuery {
    pub id: Option<String>,
}

/// Request to register an outgoing email for tracking
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterMessageRequest {
    #[validate(email)]
    pub recipient: String,
    #[validate(length(min = 1, max = 500))]
    pub subject: String,
}
