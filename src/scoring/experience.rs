use serde::Serialize;

use super::weights::{EXPERIENCE_BASE, EXPERIENCE_SURPLUS_PER_YEAR};

/// Experience-vs-requirement comparison for the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceResult {
    pub score: f64,
    pub years_of_experience: f64,
    pub years_required: f64,
    pub meets_requirement: bool,
}

/// Alignment between a candidate's experience and the job's floor.
///
/// Meeting the floor scores 80; each surplus year adds 4, saturating at 100.
/// Shortfall decays linearly (`100 × has / required`), so there is no step
/// discontinuity at the requirement boundary. A floor of 0 is trivially
/// satisfied at 100.
pub fn score_experience(years_has: f64, years_required: f64) -> ExperienceResult {
    let meets_requirement = years_has >= years_required;

    let score = if years_required <= 0.0 {
        // No floor: trivially satisfied, whatever the candidate's tenure.
        100.0
    } else if meets_requirement {
        (EXPERIENCE_BASE + EXPERIENCE_SURPLUS_PER_YEAR * (years_has - years_required)).min(100.0)
    } else {
        (100.0 * years_has / years_required).clamp(0.0, 100.0)
    };

    ExperienceResult {
        score,
        years_of_experience: years_has,
        years_required,
        meets_requirement,
    }
}
