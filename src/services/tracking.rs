use actix_web::http::header::HeaderValue;
use async_trait::async_trait;
use thiserror::Error;

use crate::models::EmailTrackingStats;

/// Errors that can occur while recording email events
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Transparent 1x1 GIF served for `open` events
pub static TRACKING_PIXEL_GIF: [u8; 43] = [
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xff, 0xff, 0xff, 0x21, 0xf9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x2c, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x02, 0x44, 0x01, 0x00, 0x3b,
];

/// Counter store behind the email tracking endpoint
///
/// Implementations report failures, but the endpoint never lets them reach
/// the email client.
#[async_trait]
pub trait TrackingStore: Send + Sync {
    /// Insert a zeroed tracking row for a new message
    async fn register_message(
        &self,
        id: &str,
        recipient: &str,
        subject: &str,
    ) -> Result<(), TrackingError>;

    /// `open_count += 1`; `opened_at` is set on the first open only
    async fn record_open(&self, id: &str) -> Result<(), TrackingError>;

    /// `click_count += 1`; `last_clicked_at` = now
    async fn record_click(&self, id: &str) -> Result<(), TrackingError>;

    /// Read the counters and timestamps of one message
    async fn get_stats(&self, id: &str) -> Result<Option<EmailTrackingStats>, TrackingError>;

    async fn health_check(&self) -> Result<bool, TrackingError>;
}

/// Builds the public URLs embedded in outgoing emails
#[derive(Debug, Clone)]
pub struct TrackingUrls {
    base_url: String,
}

impl TrackingUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1/email/track", self.base_url.trim_end_matches('/'))
    }

    /// URL of the open-tracking pixel for a message
    pub fn pixel_url(&self, message_id: &str) -> String {
        format!(
            "{}?id={}&event=open",
            self.endpoint(),
            urlencoding::encode(message_id)
        )
    }

    /// Wrap `target` in a click-tracking redirect
    pub fn click_url(&self, message_id: &str, target: &str) -> String {
        format!(
            "{}?id={}&event=click&url={}",
            self.endpoint(),
            urlencoding::encode(message_id),
            urlencoding::encode(target)
        )
    }

    /// Click URL with a `{url}` placeholder for the caller to fill in encoded
    pub fn click_url_template(&self, message_id: &str) -> String {
        format!(
            "{}?id={}&event=click&url={{url}}",
            self.endpoint(),
            urlencoding::encode(message_id)
        )
    }
}

/// Resolve the redirect target of a click event
///
/// `raw` is the `url` query value, already percent-decoded by the query
/// extractor. Blank targets mean "no redirect", and so do targets that
/// cannot be sent as a `Location` header (decoded CR/LF or other control
/// bytes); the click is then acknowledged instead.
pub fn resolve_redirect_target(raw: Option<&str>) -> Option<String> {
    let target = raw.map(str::trim).filter(|target| !target.is_empty())?;

    if HeaderValue::from_str(target).is_err() {
        tracing::debug!("Ignoring redirect target that is not a valid header value");
        return None;
    }

    Some(target.to_string())
}
