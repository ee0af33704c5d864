// Route exports
pub mod candidates;
pub mod email;

use actix_web::web;
use std::sync::Arc;

use crate::core::Matcher;
use crate::services::{CacheManager, CandidateDirectory, TrackingStore, TrackingUrls};

/// Result size bounds for candidate searches
#[derive(Debug, Clone, Copy)]
pub struct MatchLimits {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl MatchLimits {
    /// Requested limit, falling back to the default and capped at the maximum
    pub fn resolve(&self, requested: Option<u16>) -> usize {
        requested
            .map(usize::from)
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            default_limit: crate::core::DEFAULT_MATCH_LIMIT,
            max_limit: 50,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn CandidateDirectory>,
    pub tracking: Arc<dyn TrackingStore>,
    pub cache: Option<Arc<CacheManager>>,
    pub matcher: Matcher,
    pub limits: MatchLimits,
    pub tracking_urls: TrackingUrls,
    pub snapshot_key: String,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(candidates::configure)
            .configure(email::configure),
    );
}
