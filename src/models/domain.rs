use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Declared sex of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Which sex a profile is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerPreference {
    Male,
    Female,
    Any,
}

impl PartnerPreference {
    /// Whether this preference accepts a profile of the given sex
    #[inline]
    pub fn accepts(self, sex: Sex) -> bool {
        match self {
            PartnerPreference::Any => true,
            PartnerPreference::Male => sex == Sex::Male,
            PartnerPreference::Female => sex == Sex::Female,
        }
    }
}

/// The user requesting the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ViewerProfile {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub age: u8,
    pub sex: Sex,
    pub preference: PartnerPreference,
    #[serde(rename = "minAge", default)]
    pub min_age: Option<u8>,
    #[serde(rename = "maxAge", default)]
    pub max_age: Option<u8>,
}

/// A person currently checked in at the venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub age: u8,
    pub sex: Sex,
    pub preference: PartnerPreference,
    #[serde(rename = "checkedInAt")]
    pub checked_in_at: DateTime<Utc>,
}

/// A candidate paired with its composite score, only alive during one ranking call
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a CandidateProfile,
    pub score: f64,
}
