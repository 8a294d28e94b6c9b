use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::core::{filters::is_eligible, scoring::composite_score, shuffle::seeded_shuffle};
use crate::models::{CandidateProfile, ScoredCandidate, ViewerProfile};

/// Result of ranking one venue's candidates
#[derive(Debug, Clone, PartialEq)]
pub struct FeedRanking {
    pub candidates: Vec<CandidateProfile>,
    pub total_candidates: usize,
}

impl FeedRanking {
    pub fn eligible_count(&self) -> usize {
        self.candidates.len()
    }
}

/// Rank the candidates present at a venue for one viewer
///
/// # Pipeline Stages
/// 1. Drop the viewer's own check-in
/// 2. Hard eligibility filter (age range, viewer's sex preference)
/// 3. Composite scoring against `now`
/// 4. Seeded shuffle over a canonical ordering of the survivors
/// 5. Stable sort by score, descending
///
/// Ties keep the shuffle order, so the seed decides how equal scores are
/// broken. The input slice is never modified.
pub fn rank_feed(
    viewer: &ViewerProfile,
    candidates: &[CandidateProfile],
    seed: &str,
    now: DateTime<Utc>,
) -> FeedRanking {
    let total_candidates = candidates.len();

    let mut scored: Vec<ScoredCandidate<'_>> = candidates
        .iter()
        // Stage 1: Exclude self
        .filter(|candidate| candidate.user_id != viewer.user_id)
        // Stage 2: Hard filter
        .filter(|candidate| is_eligible(viewer, candidate))
        // Stage 3: Score
        .map(|candidate| ScoredCandidate {
            candidate,
            score: composite_score(viewer, candidate, now),
        })
        .collect();

    // Input order carries no meaning, so the shuffle starts from a canonical one
    scored.sort_by(|a, b| canonical_order(a.candidate, b.candidate));

    // Stage 4: Seeded shuffle
    let mut ordered = seeded_shuffle(&scored, seed);

    // Stage 5: Stable sort by score (descending)
    ordered.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    FeedRanking {
        candidates: ordered
            .into_iter()
            .map(|scored| scored.candidate.clone())
            .collect(),
        total_candidates,
    }
}

/// Total order over candidate records, id and check-in first
fn canonical_order(a: &CandidateProfile, b: &CandidateProfile) -> Ordering {
    a.user_id
        .cmp(&b.user_id)
        .then_with(|| a.checked_in_at.cmp(&b.checked_in_at))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.age.cmp(&b.age))
        .then_with(|| a.sex.cmp(&b.sex))
        .then_with(|| a.preference.cmp(&b.preference))
        .then_with(|| a.bio.cmp(&b.bio))
}

/// Order a venue feed; scores are not exposed
pub fn order_feed(
    viewer: &ViewerProfile,
    candidates: &[CandidateProfile],
    seed: &str,
    now: DateTime<Utc>,
) -> Vec<CandidateProfile> {
    rank_feed(viewer, candidates, seed, now).candidates
}

/// [`order_feed`] against the current wall clock
pub fn order_feed_now(
    viewer: &ViewerProfile,
    candidates: &[CandidateProfile],
    seed: &str,
) -> Vec<CandidateProfile> {
    order_feed(viewer, candidates, seed, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PartnerPreference, Sex};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 22, 0, 0).unwrap()
    }

    fn create_viewer() -> ViewerProfile {
        ViewerProfile {
            user_id: "viewer".to_string(),
            bio: Some("surf praia fotografia".to_string()),
            age: 30,
            sex: Sex::Male,
            preference: PartnerPreference::Female,
            min_age: None,
            max_age: None,
        }
    }

    fn create_candidate(id: &str, age: u8, sex: Sex, bio: Option<&str>, minutes_ago: i64) -> CandidateProfile {
        CandidateProfile {
            user_id: id.to_string(),
            name: format!("User {}", id),
            bio: bio.map(str::to_string),
            age,
            sex,
            preference: PartnerPreference::Any,
            checked_in_at: now() - Duration::minutes(minutes_ago),
        }
    }

    fn ids(candidates: &[CandidateProfile]) -> Vec<&str> {
        candidates.iter().map(|c| c.user_id.as_str()).collect()
    }

    #[test]
    fn test_filters_and_sorts() {
        let candidates = vec![
            create_candidate("stale", 28, Sex::Female, None, 300),
            create_candidate("male", 28, Sex::Male, Some("surf praia fotografia"), 1),
            create_candidate("best", 28, Sex::Female, Some("surf praia fotografia"), 1),
            create_candidate("old", 45, Sex::Female, Some("surf praia fotografia"), 1),
            create_candidate("fresh", 28, Sex::Female, None, 1),
        ];

        let ranking = rank_feed(&create_viewer(), &candidates, "seed", now());

        assert_eq!(ids(&ranking.candidates), vec!["best", "fresh", "stale"]);
        assert_eq!(ranking.total_candidates, 5);
        assert_eq!(ranking.eligible_count(), 3);
    }

    #[test]
    fn test_viewer_never_in_output() {
        let mut own = create_candidate("viewer", 30, Sex::Female, None, 1);
        own.name = "Me".to_string();
        let candidates = vec![own, create_candidate("other", 30, Sex::Female, None, 1)];

        let ordered = order_feed(&create_viewer(), &candidates, "seed", now());

        assert_eq!(ids(&ordered), vec!["other"]);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let candidates: Vec<CandidateProfile> = (0..8)
            .map(|i| create_candidate(&format!("c{}", i), 28, Sex::Female, None, 1))
            .collect();
        let mut reversed = candidates.clone();
        reversed.reverse();

        let a = order_feed(&create_viewer(), &candidates, "session-1", now());
        let b = order_feed(&create_viewer(), &reversed, "session-1", now());

        assert_eq!(a, b);
    }

    #[test]
    fn test_same_id_records_order_independent_of_input() {
        let mut first = create_candidate("dup", 28, Sex::Female, None, 1);
        first.name = "A".to_string();
        let mut second = first.clone();
        second.name = "B".to_string();

        let forward = order_feed(&create_viewer(), &[first.clone(), second.clone()], "seed", now());
        let backward = order_feed(&create_viewer(), &[second, first], "seed", now());

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_canonical_order_distinguishes_every_field() {
        let base = create_candidate("c", 28, Sex::Female, Some("surf"), 1);
        let variants = [
            CandidateProfile { age: 29, ..base.clone() },
            CandidateProfile { sex: Sex::Other, ..base.clone() },
            CandidateProfile { preference: PartnerPreference::Male, ..base.clone() },
            CandidateProfile { bio: None, ..base.clone() },
        ];

        for variant in &variants {
            assert_ne!(canonical_order(&base, variant), Ordering::Equal);
        }
        assert_eq!(canonical_order(&base, &base.clone()), Ordering::Equal);
    }

    #[test]
    fn test_empty_input() {
        assert!(order_feed(&create_viewer(), &[], "seed", now()).is_empty());
    }

    #[test]
    fn test_order_feed_now_uses_clock() {
        let candidate = CandidateProfile {
            checked_in_at: Utc::now(),
            ..create_candidate("c", 28, Sex::Female, None, 0)
        };

        let ordered = order_feed_now(&create_viewer(), &[candidate.clone()], "seed");

        assert_eq!(ordered, vec![candidate]);
    }
}
