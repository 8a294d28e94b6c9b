use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{CandidateProfile, ViewerProfile};

/// Reasons a feed request is rejected before it reaches the ranking core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Validation failed: {0}")]
    Invalid(String),

    #[error("Too many candidates: {count} (max {max})")]
    TooManyCandidates { count: usize, max: usize },

    #[error("Duplicate candidate id: {0}")]
    DuplicateCandidate(String),

    #[error("Viewer minAge {min} is greater than maxAge {max}")]
    InvertedAgeRange { min: u8, max: u8 },
}

/// Request to order the candidates present at a venue
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderFeedRequest {
    #[validate(nested)]
    pub viewer: ViewerProfile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[validate(length(min = 1))]
    pub seed: String,
    /// Reference instant for recency scoring; the server clock is used when absent
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

impl OrderFeedRequest {
    /// Reject input the ranking core does not handle
    pub fn check(&self, max_candidates: usize) -> Result<(), RequestError> {
        self.validate()
            .map_err(|errors| RequestError::Invalid(errors.to_string()))?;

        if let (Some(min), Some(max)) = (self.viewer.min_age, self.viewer.max_age) {
            if min > max {
                return Err(RequestError::InvertedAgeRange { min, max });
            }
        }

        if self.candidates.len() > max_candidates {
            return Err(RequestError::TooManyCandidates {
                count: self.candidates.len(),
                max: max_candidates,
            });
        }

        let mut seen = HashSet::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            if !seen.insert(candidate.user_id.as_str()) {
                return Err(RequestError::DuplicateCandidate(candidate.user_id.clone()));
            }
        }

        Ok(())
    }
}
