use serde::Serialize;

use super::weights::{REFERRAL_MULTIPLIER_BASE, REFERRAL_MULTIPLIER_STEP};
use crate::Referral;

/// Referral signal for the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferralResult {
    pub score: f64,
    pub count: usize,
    /// Weight-averaged trust across all referrals, 0 when there are none.
    pub weighted_trust: f64,
    /// Count-based corroboration multiplier applied to the trust average.
    pub multiplier: f64,
}

/// Trust-weighted referral strength with a corroboration multiplier.
///
/// A single referral is discounted to 75%; two or more corroborating
/// referrals carry full weight. Zero referrals score 0, which is a valid
/// state for a new candidate, not an error.
pub fn score_referrals(referrals: &[Referral]) -> ReferralResult {
    let count = referrals.len();
    if count == 0 {
        return ReferralResult {
            score: 0.0,
            count: 0,
            weighted_trust: 0.0,
            multiplier: 0.0,
        };
    }

    let total_weight: f64 = referrals.iter().map(|r| r.weight).sum();
    let weighted_trust = if total_weight > 0.0 {
        referrals
            .iter()
            .map(|r| r.trust_score * r.weight)
            .sum::<f64>()
            / total_weight
    } else {
        // All weights zero: fall back to the unweighted mean rather than
        // treating present referrals as absent.
        referrals.iter().map(|r| r.trust_score).sum::<f64>() / count as f64
    };

    let multiplier = (REFERRAL_MULTIPLIER_BASE + REFERRAL_MULTIPLIER_STEP * count as f64).min(1.0);
    let score = 100.0 * (weighted_trust * multiplier).min(1.0);

    ReferralResult {
        score,
        count,
        weighted_trust,
        multiplier,
    }
}
