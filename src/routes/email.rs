use actix_web::{http::header, web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    EmailEvent, ErrorResponse, RegisterMessageRequest, RegisterMessageResponse, TrackEventQuery,
    TrackingStatsQuery,
};
use crate::routes::AppState;
use crate::services::{resolve_redirect_target, TRACKING_PIXEL_GIF};

/// Configure email tracking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/email/track", web::get().to(track_event))
        .route("/email/stats", web::get().to(get_stats))
        .route("/email/messages", web::post().to(register_message));
}

fn bad_request(error: &str, message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: 400,
    })
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Email open/click tracking endpoint
///
/// GET /api/v1/email/track?id={messageId}&event=open|click[&url={target}]
///
/// Counter failures are logged and never change the response: opens always
/// get the pixel, clicks always get their redirect.
async fn track_event(
    state: web::Data<AppState>,
    query: web::Query<TrackEventQuery>,
) -> impl Responder {
    let (id, event) = match (non_blank(&query.id), query.event.as_deref()) {
        (Some(id), Some(event)) if !event.trim().is_empty() => (id, event),
        _ => {
            return bad_request(
                "Missing parameters",
                "id and event query parameters are required",
            );
        }
    };

    let event = match EmailEvent::parse(event) {
        Some(event) => event,
        None => {
            return bad_request("Invalid event type", "Event must be one of: open, click");
        }
    };

    match event {
        EmailEvent::Open => {
            if let Err(e) = state.tracking.record_open(id).await {
                tracing::warn!("Failed to record open for message {}: {}", id, e);
            }

            HttpResponse::Ok()
                .content_type("image/gif")
                .insert_header((
                    header::CACHE_CONTROL,
                    "no-store, no-cache, must-revalidate, private",
                ))
                .insert_header((header::PRAGMA, "no-cache"))
                .insert_header((header::EXPIRES, "0"))
                .body(web::Bytes::from_static(&TRACKING_PIXEL_GIF))
        }
        EmailEvent::Click => {
            if let Err(e) = state.tracking.record_click(id).await {
                tracing::warn!("Failed to record click for message {}: {}", id, e);
            }

            match resolve_redirect_target(query.url.as_deref()) {
                Some(target) => HttpResponse::Found()
                    .insert_header((header::LOCATION, target))
                    .finish(),
                None => HttpResponse::Ok()
                    .content_type("text/plain; charset=utf-8")
                    .body("Click tracked"),
            }
        }
    }
}

/// Tracking counters for one message
///
/// GET /api/v1/email/stats?id={messageId}
async fn get_stats(
    state: web::Data<AppState>,
    query: web::Query<TrackingStatsQuery>,
) -> impl Responder {
    let id = match non_blank(&query.id) {
        Some(id) => id,
        None => return bad_request("Missing id parameter", "id query parameter is required"),
    };

    match state.tracking.get_stats(id).await {
        Ok(Some(stats)) => HttpResponse::Ok().json(stats),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: format!("No tracked message with id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to read tracking stats for {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to read tracking stats".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Register an outgoing email and hand back its tracking URLs
///
/// POST /api/v1/email/messages
///
/// Request body:
/// ```json
/// {
///   "recipient": "candidate@example.edu",
///   "subject": "Interview invitation"
/// }
/// ```
async fn register_message(
    state: web::Data<AppState>,
    req: web::Json<RegisterMessageRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let id = uuid::Uuid::new_v4().to_string();

    match state
        .tracking
        .register_message(&id, &req.recipient, &req.subject)
        .await
    {
        Ok(()) => {
            tracing::info!("Registered tracked message {}", id);
            HttpResponse::Created().json(RegisterMessageResponse {
                pixel_url: state.tracking_urls.pixel_url(&id),
                click_url_template: state.tracking_urls.click_url_template(&id),
                id,
            })
        }
        Err(e) => {
            tracing::error!("Failed to register tracked message: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to register message".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
