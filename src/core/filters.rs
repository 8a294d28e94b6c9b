use crate::core::constants::{DEFAULT_AGE_DELTA, MIN_ELIGIBLE_AGE};
use crate::models::{CandidateProfile, PartnerPreference, Sex, ViewerProfile};

/// Inclusive age range a viewer accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    #[inline]
    pub fn contains(&self, age: u8) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Effective age range for a viewer
///
/// Overrides win over the default `age ± 10` window; the lower bound is
/// floored at 18 either way.
pub fn effective_age_range(viewer: &ViewerProfile) -> AgeRange {
    let min = viewer
        .min_age
        .unwrap_or_else(|| viewer.age.saturating_sub(DEFAULT_AGE_DELTA))
        .max(MIN_ELIGIBLE_AGE);
    let max = viewer
        .max_age
        .unwrap_or_else(|| viewer.age.saturating_add(DEFAULT_AGE_DELTA));

    AgeRange { min, max }
}

/// Whether `preference` accepts a profile of `sex`
#[inline]
pub fn wants(preference: PartnerPreference, sex: Sex) -> bool {
    preference.accepts(sex)
}

/// Hard eligibility filter
///
/// A candidate must fall inside the viewer's effective age range and be of a
/// sex the viewer wants. Only the viewer's side of the preference is checked;
/// the candidate's own preference is not consulted here.
#[inline]
pub fn is_eligible(viewer: &ViewerProfile, candidate: &CandidateProfile) -> bool {
    if !effective_age_range(viewer).contains(candidate.age) {
        return false;
    }

    wants(viewer.preference, candidate.sex)
}
