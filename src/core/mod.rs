// Core algorithm exports
pub mod constants;
pub mod feed;
pub mod filters;
pub mod keywords;
pub mod scoring;
pub mod shuffle;

pub use feed::{order_feed, order_feed_now, rank_feed, FeedRanking};
pub use filters::{effective_age_range, is_eligible, wants, AgeRange};
pub use keywords::extract_keywords;
pub use scoring::{bio_similarity, composite_score, recency_score};
pub use shuffle::{fnv1a_32, seeded_shuffle, Mulberry32};
