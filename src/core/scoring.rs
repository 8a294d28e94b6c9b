use chrono::{DateTime, Utc};

use crate::core::constants::{recency_cutoff, recency_fresh_window, BIO_WEIGHT, RECENCY_WEIGHT};
use crate::core::keywords::extract_keywords;
use crate::models::{CandidateProfile, ViewerProfile};

/// Calculate a compatibility score (0-1) for a candidate
///
/// Scoring formula:
/// score = (
///     bio_similarity * 0.6 +     # Shared bio keywords
///     recency * 0.4              # Fresher check-in = higher
/// )
pub fn composite_score(
    viewer: &ViewerProfile,
    candidate: &CandidateProfile,
    now: DateTime<Utc>,
) -> f64 {
    let similarity = bio_similarity(viewer.bio.as_deref(), candidate.bio.as_deref());
    let recency = recency_score(candidate.checked_in_at, now);

    (similarity * BIO_WEIGHT + recency * RECENCY_WEIGHT).clamp(0.0, 1.0)
}

/// Keyword overlap between two bios (0-1)
///
/// |A ∩ B| / max(|A|, |B|). Two bios without keywords score 0, not 1.
pub fn bio_similarity(bio_a: Option<&str>, bio_b: Option<&str>) -> f64 {
    let keywords_a = extract_keywords(bio_a);
    let keywords_b = extract_keywords(bio_b);

    let larger = keywords_a.len().max(keywords_b.len());
    if larger == 0 {
        return 0.0;
    }

    let shared = keywords_a.intersection(&keywords_b).count();
    shared as f64 / larger as f64
}

/// Check-in freshness (0-1)
///
/// Flat 1.0 for the first 15 minutes, then a linear decay reaching 0.0 at 4 hours.
/// Check-ins stamped after `now` count as brand new.
pub fn recency_score(checked_in_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let presence = now.signed_duration_since(checked_in_at);
    let fresh = recency_fresh_window();
    let cutoff = recency_cutoff();

    if presence <= fresh {
        return 1.0;
    }
    if presence >= cutoff {
        return 0.0;
    }

    let elapsed = (presence - fresh).num_milliseconds() as f64;
    let window = (cutoff - fresh).num_milliseconds() as f64;

    (1.0 - elapsed / window).clamp(0.0, 1.0)
}
