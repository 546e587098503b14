/// Weight-policy version surfaced on API responses. Any change to the
/// constants in this file is a product-semantics change and must bump this,
/// never ship as a silent fix.
pub const RULE_VERSION: &str = "2025.1";

/// Overall blend. Technical fit dominates, soft/referral signal is secondary,
/// experience alignment acts as a modifier.
pub const FIT_WEIGHTS: FitWeights = FitWeights {
    tms: 0.5,
    srs: 0.3,
    rns: 0.2,
};

/// SRS blend between the soft-skill survey mean and the referral signal.
pub const SRS_SOFT_WEIGHT: f64 = 0.6;
pub const SRS_REFERRAL_WEIGHT: f64 = 0.4;

/// Experience curve: meeting the floor scores EXPERIENCE_BASE, each surplus
/// year adds EXPERIENCE_SURPLUS_PER_YEAR, saturating at 100.
pub const EXPERIENCE_BASE: f64 = 80.0;
pub const EXPERIENCE_SURPLUS_PER_YEAR: f64 = 4.0;

/// Referral count multiplier: min(1, REFERRAL_MULTIPLIER_BASE + STEP × count).
/// One referral carries 75% weight, two or more carry full weight.
pub const REFERRAL_MULTIPLIER_BASE: f64 = 0.5;
pub const REFERRAL_MULTIPLIER_STEP: f64 = 0.25;

// Confidence penalties (data completeness and signal agreement).
pub const CONFIDENCE_SPARSE_SOFT_SKILLS_PENALTY: f64 = 15.0;
pub const CONFIDENCE_NO_REFERRALS_PENALTY: f64 = 10.0;
pub const CONFIDENCE_DISAGREEMENT_FACTOR: f64 = 0.4;
pub const CONFIDENCE_DISAGREEMENT_CAP: f64 = 20.0;

#[derive(Debug, Clone, Copy)]
pub struct FitWeights {
    pub tms: f64,
    pub srs: f64,
    pub rns: f64,
}

impl FitWeights {
    pub fn sum(&self) -> f64 {
        self.tms + self.srs + self.rns
    }
}
