use serde::Serialize;

use super::weights::{
    CONFIDENCE_DISAGREEMENT_CAP, CONFIDENCE_DISAGREEMENT_FACTOR,
    CONFIDENCE_NO_REFERRALS_PENALTY, CONFIDENCE_SPARSE_SOFT_SKILLS_PENALTY,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceResult {
    pub score: f64,
    pub sparse_soft_skills: bool,
    pub no_referrals: bool,
    /// Points subtracted for TMS/RNS disagreement (large spread between
    /// technical match and experience fit lowers trust in the blend).
    pub disagreement_penalty: f64,
}

/// How much the blended score should be trusted, given data completeness and
/// sub-score agreement. Starts at 100 and only ever subtracts.
pub fn score_confidence(
    tms: f64,
    rns: f64,
    rated_soft_dimensions: usize,
    referral_count: usize,
) -> ConfidenceResult {
    let mut score = 100.0;

    let sparse_soft_skills = rated_soft_dimensions < 2;
    if sparse_soft_skills {
        score -= CONFIDENCE_SPARSE_SOFT_SKILLS_PENALTY;
    }

    let no_referrals = referral_count == 0;
    if no_referrals {
        score -= CONFIDENCE_NO_REFERRALS_PENALTY;
    }

    let disagreement_penalty =
        (CONFIDENCE_DISAGREEMENT_FACTOR * (tms - rns).abs()).min(CONFIDENCE_DISAGREEMENT_CAP);
    score -= disagreement_penalty;

    ConfidenceResult {
        score: score.clamp(0.0, 100.0),
        sparse_soft_skills,
        no_referrals,
        disagreement_penalty,
    }
}
