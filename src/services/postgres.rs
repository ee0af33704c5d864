use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::models::EmailTrackingStats;
use crate::services::tracking::{TrackingError, TrackingStore};

/// PostgreSQL-backed email tracking store
///
/// Owns the `email_tracking` table. Counter updates are single statements,
/// so concurrent opens or clicks of the same message never lose an increment.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
        idle_timeout_secs: u64,
    ) -> Result<Self, TrackingError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, TrackingError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            acquire_timeout_secs.unwrap_or(5),
            idle_timeout_secs.unwrap_or(600),
        )
        .await
    }
}

#[async_trait]
impl TrackingStore for PostgresClient {
    async fn register_message(
        &self,
        id: &str,
        recipient: &str,
        subject: &str,
    ) -> Result<(), TrackingError> {
        let query = r#"
            INSERT INTO email_tracking (id, recipient_email, subject, sent_at)
            VALUES ($1, $2, $3, NOW())
        "#;

        sqlx::query(query)
            .bind(id)
            .bind(recipient)
            .bind(subject)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Registered tracked message {}", id);

        Ok(())
    }

    async fn record_open(&self, id: &str) -> Result<(), TrackingError> {
        let query = r#"
            UPDATE email_tracking
            SET open_count = open_count + 1,
                opened_at = COALESCE(opened_at, NOW())
            WHERE id = $1
        "#;

        let result = sqlx::query(query).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            tracing::debug!("Open event for unknown message {}", id);
        }

        Ok(())
    }

    async fn record_click(&self, id: &str) -> Result<(), TrackingError> {
        let query = r#"
            UPDATE email_tracking
            SET click_count = click_count + 1,
                last_clicked_at = NOW()
            WHERE id = $1
        "#;

        let result = sqlx::query(query).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            tracing::debug!("Click event for unknown message {}", id);
        }

        Ok(())
    }

    async fn get_stats(&self, id: &str) -> Result<Option<EmailTrackingStats>, TrackingError> {
        let query = r#"
            SELECT id, open_count, opened_at, click_count, last_clicked_at
            FROM email_tracking
            WHERE id = $1
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        Ok(row.map(|row| EmailTrackingStats {
            id: row.get("id"),
            open_count: row.get("open_count"),
            opened_at: row.get("opened_at"),
            click_count: row.get("click_count"),
            last_clicked_at: row.get("last_clicked_at"),
        }))
    }

    async fn health_check(&self) -> Result<bool, TrackingError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
