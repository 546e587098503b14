use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{FitScoreResult, RULE_VERSION};

/// Engine build version surfaced alongside the rule version.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Serialization-facing fit score, shaped exactly like the payloads the
/// Skylevel UI and API consumers are defined against (camelCase, nested
/// `breakdown`). Score fields are rounded to one decimal for presentation;
/// the unrounded values stay on [`FitScoreResult`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FitScoreResponse {
    /// Derived identifier; the engine stores nothing, so this is purely a
    /// convenience key for consumers.
    pub id: String,
    pub candidate_id: String,
    pub job_id: String,

    // === Scores ===
    pub tms_score: f64,
    pub srs_score: f64,
    pub rns_score: f64,
    pub overall_score: f64,
    pub confidence: f64,

    // === Explanation ===
    pub breakdown: FitBreakdownResponse,

    // === Metadata ===
    pub engine_version: String,
    pub rule_version: String,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FitBreakdownResponse {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience: ExperienceResponse,
    pub soft_skills: SoftSkillsResponse,
    pub referrals: ReferralsResponse,
    pub confidence: ConfidenceResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceResponse {
    pub score: f64,
    pub years_has: f64,
    pub years_required: f64,
    pub meets_requirement: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkillsResponse {
    pub score: f64,
    pub communication: Option<f64>,
    pub teamwork: Option<f64>,
    pub leadership: Option<f64>,
    pub no_data: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralsResponse {
    pub score: f64,
    pub count: usize,
    pub weighted_trust: f64,
    /// Count-based corroboration multiplier applied to the trust average.
    pub multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceResponse {
    pub score: f64,
    pub sparse_soft_skills: bool,
    pub no_referrals: bool,
    pub disagreement_penalty: f64,
}

impl FitScoreResponse {
    pub fn from_result(result: &FitScoreResult) -> Self {
        let b = &result.breakdown;

        Self {
            id: format!("fit-{}-{}", result.candidate_id, result.job_id),
            candidate_id: result.candidate_id.clone(),
            job_id: result.job_id.clone(),
            tms_score: round_one_decimal(result.tms_score),
            srs_score: round_one_decimal(result.srs_score),
            rns_score: round_one_decimal(result.rns_score),
            overall_score: result.overall_score,
            confidence: round_one_decimal(result.confidence),
            breakdown: FitBreakdownResponse {
                matched_skills: b.skills.matched.clone(),
                missing_skills: b.skills.missing.clone(),
                experience: ExperienceResponse {
                    score: round_one_decimal(b.experience.score),
                    years_has: b.experience.years_of_experience,
                    years_required: b.experience.years_required,
                    meets_requirement: b.experience.meets_requirement,
                },
                soft_skills: SoftSkillsResponse {
                    score: round_one_decimal(b.soft_skills.score),
                    communication: b.soft_skills.communication,
                    teamwork: b.soft_skills.teamwork,
                    leadership: b.soft_skills.leadership,
                    no_data: b.soft_skills.no_data,
                },
                referrals: ReferralsResponse {
                    score: round_one_decimal(b.referrals.score),
                    count: b.referrals.count,
                    weighted_trust: b.referrals.weighted_trust,
                    multiplier: b.referrals.multiplier,
                },
                confidence: ConfidenceResponse {
                    score: round_one_decimal(b.confidence.score),
                    sparse_soft_skills: b.confidence.sparse_soft_skills,
                    no_referrals: b.confidence.no_referrals,
                    disagreement_penalty: round_one_decimal(b.confidence.disagreement_penalty),
                },
            },
            engine_version: ENGINE_VERSION.to_string(),
            rule_version: RULE_VERSION.to_string(),
            calculated_at: result.calculated_at,
        }
    }
}

impl From<&FitScoreResult> for FitScoreResponse {
    fn from(result: &FitScoreResult) -> Self {
        Self::from_result(result)
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
