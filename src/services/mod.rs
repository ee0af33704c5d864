// Service exports
pub mod appwrite;
pub mod cache;
pub mod postgres;
pub mod tracking;

pub use appwrite::{AppwriteClient, AppwriteError, CandidateDirectory};
pub use cache::{CacheManager, CacheKey, CacheError};
pub use postgres::PostgresClient;
pub use tracking::{TrackingStore, TrackingError, TrackingUrls, TRACKING_PIXEL_GIF, resolve_redirect_target};
