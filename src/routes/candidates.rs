use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    CandidateRecord, ErrorResponse, HealthResponse, SearchCandidatesRequest,
    SearchCandidatesResponse,
};
use crate::routes::AppState;
use crate::services::AppwriteError;

/// Configure candidate search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/candidates/search", web::post().to(search_candidates))
        .route("/candidates/refresh", web::post().to(refresh_snapshot));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.tracking.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search candidates endpoint
///
/// POST /api/v1/candidates/search
///
/// Request body:
/// ```json
/// {
///   "intent": {
///     "role": "Lecturer",
///     "department": "Computer Science",
///     "skills": ["Python"],
///     "experience_years": 3,
///     "location": "Leeds"
///   },
///   "limit": 10
/// }
/// ```
async fn search_candidates(
    state: web::Data<AppState>,
    req: web::Json<SearchCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let SearchCandidatesRequest { intent, limit } = req.into_inner();
    let limit = state.limits.resolve(limit);

    if intent.is_empty() {
        return HttpResponse::Ok().json(SearchCandidatesResponse {
            candidates: vec![],
            message: "No search criteria were provided.".to_string(),
            search_criteria: intent,
            total_candidates: 0,
        });
    }

    tracing::info!("Searching candidates: {:?}, limit: {}", intent, limit);

    let snapshot = match load_snapshot(&state).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to load candidate directory: {}", e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to load candidates".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    let result = state.matcher.match_candidates(&intent, snapshot, limit);

    tracing::info!(
        "Returning {} candidates (from {} in directory)",
        result.matches.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(SearchCandidatesResponse {
        message: summary_message(result.matches.len()),
        candidates: result.matches,
        search_criteria: intent,
        total_candidates: result.total_candidates,
    })
}

/// Drop the cached directory snapshot so the next search refetches it
///
/// POST /api/v1/candidates/refresh
async fn refresh_snapshot(state: web::Data<AppState>) -> impl Responder {
    if let Some(cache) = &state.cache {
        if let Err(e) = cache.delete(&state.snapshot_key).await {
            tracing::error!("Failed to drop candidate snapshot: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to refresh candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    }

    HttpResponse::NoContent().finish()
}

/// Directory snapshot, cache first
async fn load_snapshot(state: &AppState) -> Result<Vec<CandidateRecord>, AppwriteError> {
    if let Some(cache) = &state.cache {
        match cache.get::<Vec<CandidateRecord>>(&state.snapshot_key).await {
            Ok(candidates) => return Ok(candidates),
            Err(e) => tracing::debug!("Candidate snapshot not cached: {}", e),
        }
    }

    let candidates = state.directory.list_candidates().await?;

    if let Some(cache) = &state.cache {
        if let Err(e) = cache.set(&state.snapshot_key, &candidates).await {
            tracing::warn!("Failed to cache candidate snapshot: {}", e);
        }
    }

    Ok(candidates)
}

fn summary_message(found: usize) -> String {
    match found {
        0 => "No candidates matched your search criteria.".to_string(),
        1 => "Found 1 matching candidate.".to_string(),
        n => format!("Found {} matching candidates.", n),
    }
}
