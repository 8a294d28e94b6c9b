//! Venue Feed - "who's here now" ordering for venue check-ins
//!
//! This library ranks the people checked in at a venue for one viewer.
//! The pipeline is pure and deterministic: hard eligibility filter, bio and
//! recency scoring, a seeded shuffle for tie-breaking, then a stable sort.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{order_feed, order_feed_now, rank_feed, FeedRanking};
pub use models::{CandidateProfile, PartnerPreference, Sex, ViewerProfile, OrderFeedRequest, OrderFeedResponse};
