use serde::{Deserialize, Serialize};
use crate::models::domain::CandidateProfile;

/// Response for the feed ordering endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFeedResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub candidates: Vec<CandidateProfile>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "eligibleCount")]
    pub eligible_count: usize,
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
