use crate::models::CandidateRecord;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Documents requested per page when walking the candidate collection
const PAGE_SIZE: usize = 100;

/// Errors that can occur when interacting with Appwrite
#[derive(Debug, Error)]
pub enum AppwriteError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Source of candidate directory snapshots
#[async_trait]
pub trait CandidateDirectory: Send + Sync {
    /// Fetch every candidate profile, in directory order
    async fn list_candidates(&self) -> Result<Vec<CandidateRecord>, AppwriteError>;
}

/// Appwrite API client
///
/// Reads the candidate profile collection of the portal's managed backend.
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    collection_id: String,
    max_candidates: usize,
    client: Client,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collection_id: String,
        max_candidates: usize,
    ) -> Result<Self, AppwriteError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            collection_id,
            max_candidates,
            client,
        })
    }

    fn documents_url(&self, offset: usize, limit: usize) -> String {
        let queries = [format!("limit({})", limit), format!("offset({})", offset)];
        let query_string = queries
            .iter()
            .map(|q| format!("queries[]={}", urlencoding::encode(q)))
            .collect::<Vec<_>>()
            .join("&");

        format!(
            "{}/databases/{}/collections/{}/documents?{}",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collection_id,
            query_string
        )
    }

    /// Fetch one page of candidate documents
    async fn fetch_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<(Vec<CandidateRecord>, usize), AppwriteError> {
        let url = self.documents_url(offset, limit);

        tracing::debug!("Fetching candidates from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(AppwriteError::Unauthorized);
            }
            status => {
                return Err(AppwriteError::ApiError(format!(
                    "Failed to list candidates: {}",
                    status
                )));
            }
        }

        let json: Value = response.json().await?;

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| AppwriteError::InvalidResponse("Missing documents array".into()))?;

        let candidates = documents
            .iter()
            .filter_map(|doc| match parse_candidate(doc) {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    tracing::warn!("Skipping malformed candidate document: {}", e);
                    None
                }
            })
            .collect();

        Ok((candidates, documents.len()))
    }
}

#[async_trait]
impl CandidateDirectory for AppwriteClient {
    async fn list_candidates(&self) -> Result<Vec<CandidateRecord>, AppwriteError> {
        let mut candidates = Vec::new();
        let mut offset = 0;

        while offset < self.max_candidates {
            let limit = PAGE_SIZE.min(self.max_candidates - offset);
            let (page, returned) = self.fetch_page(offset, limit).await?;
            candidates.extend(page);

            if returned < limit {
                break;
            }
            offset += returned;
        }

        tracing::debug!("Loaded {} candidates from directory", candidates.len());

        Ok(candidates)
    }
}

/// Convert an Appwrite document into a candidate, taking `$id` when the
/// document carries no `id` attribute of its own
fn parse_candidate(doc: &Value) -> Result<CandidateRecord, AppwriteError> {
    let mut data = doc.get("data").unwrap_or(doc).clone();

    if let Some(object) = data.as_object_mut() {
        if !object.contains_key("id") {
            if let Some(doc_id) = doc.get("$id").cloned() {
                object.insert("id".to_string(), doc_id);
            }
        }
    }

    serde_json::from_value(data)
        .map_err(|e| AppwriteError::InvalidResponse(format!("Failed to parse candidate: {}", e)))
}
