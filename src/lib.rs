pub mod api;
pub mod error;
pub mod scoring;
pub mod skill_normalizer;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use error::EngineError;
pub use scoring::engine::{FitEngineConfig, FitScoreEngine};
pub use scoring::pipeline::{RankedCandidate, RankingConfig};
pub use scoring::FitScoreResult;

// Input data models, owned by the external data store. The engine never
// mutates them and never caches results derived from them.

/// A single referral on a candidate's profile. `trust_score` is the
/// referrer's trust rating in [0.0, 1.0]; `weight` is the relative weight
/// of this referral when averaging (non-negative).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    pub trust_score: f64,
    #[serde(default = "default_referral_weight")]
    pub weight: f64,
}

fn default_referral_weight() -> f64 {
    1.0
}

/// Soft-skill survey ratings, each in [0, 100]. `None` means the dimension
/// was never rated, which is a valid business state (new candidate, no
/// survey yet) and is scored differently from a rating of 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoftSkillRatings {
    pub communication: Option<f64>,
    pub teamwork: Option<f64>,
    pub leadership: Option<f64>,
}

impl SoftSkillRatings {
    /// Rated dimensions in a fixed order, skipping the unrated ones.
    pub fn rated(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        [
            ("communication", self.communication),
            ("teamwork", self.teamwork),
            ("leadership", self.leadership),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    pub fn rated_count(&self) -> usize {
        self.rated().count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    /// Skill tags as entered; matched case-insensitively after normalization.
    pub skills: Vec<String>,
    pub years_of_experience: f64,
    #[serde(default)]
    pub soft_skills: SoftSkillRatings,
    #[serde(default)]
    pub referrals: Vec<Referral>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub required_skills: Vec<String>,
    /// 0 means no experience floor.
    pub min_years_required: f64,
    /// Optional per-skill importance. Keys are matched after normalization;
    /// skills absent from the map weigh 1.0.
    #[serde(default)]
    pub skill_weights: HashMap<String, f64>,
}
