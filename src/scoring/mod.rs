pub mod confidence;
pub mod engine;
pub mod experience;
pub mod pipeline;
pub mod referrals;
pub mod skills;
pub mod soft_skills;
pub mod weights;

pub use confidence::{score_confidence, ConfidenceResult};
pub use engine::{FitBreakdown, FitEngineConfig, FitScoreEngine, FitScoreResult};
pub use experience::{score_experience, ExperienceResult};
pub use pipeline::{RankedCandidate, RankingConfig};
pub use referrals::{score_referrals, ReferralResult};
pub use skills::{score_skill_match, SkillMatchResult};
pub use soft_skills::{score_soft_skills, SoftSkillResult};
pub use weights::{FitWeights, FIT_WEIGHTS, RULE_VERSION};
