// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, PartnerPreference, ScoredCandidate, Sex, ViewerProfile};
pub use requests::{OrderFeedRequest, RequestError};
pub use responses::{ErrorResponse, HealthResponse, OrderFeedResponse};
