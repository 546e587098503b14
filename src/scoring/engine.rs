use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::confidence::{score_confidence, ConfidenceResult};
use super::experience::{score_experience, ExperienceResult};
use super::referrals::{score_referrals, ReferralResult};
use super::skills::{score_skill_match, SkillMatchResult};
use super::soft_skills::{score_soft_skills, SoftSkillResult};
use super::weights::{FitWeights, FIT_WEIGHTS, SRS_REFERRAL_WEIGHT, SRS_SOFT_WEIGHT};
use crate::error::EngineError;
use crate::skill_normalizer::normalize_skill_set;
use crate::{Candidate, Job};

#[derive(Debug, Clone)]
pub struct FitEngineConfig {
    pub weights: FitWeights,
    /// Reject jobs that carry neither required skills nor an experience
    /// floor instead of letting them degenerate to TMS=100 / RNS=100.
    pub strict_jobs: bool,
}

impl Default for FitEngineConfig {
    fn default() -> Self {
        Self {
            weights: FIT_WEIGHTS,
            strict_jobs: false,
        }
    }
}

/// Explainable sub-score detail, preserved as the canonical breakdown shape
/// downstream consumers are defined against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitBreakdown {
    pub skills: SkillMatchResult,
    pub experience: ExperienceResult,
    pub soft_skills: SoftSkillResult,
    pub referrals: ReferralResult,
    pub confidence: ConfidenceResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitScoreResult {
    pub candidate_id: String,
    pub job_id: String,
    /// Technical Match Score: weighted required-skill coverage.
    pub tms_score: f64,
    /// Soft/Referral Score: 0.6 × soft-skill mean + 0.4 × referral strength.
    pub srs_score: f64,
    /// Role Needs Score: experience alignment.
    pub rns_score: f64,
    /// 0.5 × TMS + 0.3 × SRS + 0.2 × RNS, rounded to one decimal.
    pub overall_score: f64,
    /// Trust in the blend, penalized for sparse data and sub-score spread.
    pub confidence: f64,
    pub breakdown: FitBreakdown,
    /// The only field that varies between identical invocations.
    pub calculated_at: DateTime<Utc>,
}

/// Pure, stateless Fit Score computation. No I/O, no caching, no hidden
/// state: identical inputs yield bit-identical score fields.
#[derive(Debug, Clone, Default)]
pub struct FitScoreEngine {
    config: FitEngineConfig,
}

impl FitScoreEngine {
    pub fn new(config: FitEngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FitEngineConfig {
        &self.config
    }

    /// Score one candidate against one job.
    ///
    /// Validation runs in full before any scoring; an invalid record fails
    /// the call without a partial result. Missing optional data (no soft
    /// skills, zero referrals) is not an error, it scores as defined.
    pub fn compute_fit_score(
        &self,
        candidate: &Candidate,
        job: &Job,
    ) -> Result<FitScoreResult, EngineError> {
        validate_candidate(candidate)?;
        validate_job(job)?;
        if self.config.strict_jobs && job_is_empty(job) {
            return Err(EngineError::EmptyJobDescription {
                job_id: job.id.clone(),
            });
        }

        let skills = score_skill_match(job, &candidate.skills);
        let experience = score_experience(candidate.years_of_experience, job.min_years_required);
        let soft_skills = score_soft_skills(&candidate.soft_skills);
        let referrals = score_referrals(&candidate.referrals);

        let tms = skills.score;
        let rns = experience.score;
        let srs = SRS_SOFT_WEIGHT * soft_skills.score + SRS_REFERRAL_WEIGHT * referrals.score;

        let weights = &self.config.weights;
        let overall = round_one_decimal(weights.tms * tms + weights.srs * srs + weights.rns * rns);

        let confidence = score_confidence(
            tms,
            rns,
            soft_skills.rated_dimensions,
            referrals.count,
        );

        debug!(
            candidate_id = %candidate.id,
            job_id = %job.id,
            tms,
            srs,
            rns,
            overall,
            confidence = confidence.score,
            "fit score computed"
        );

        Ok(FitScoreResult {
            candidate_id: candidate.id.clone(),
            job_id: job.id.clone(),
            tms_score: tms,
            srs_score: srs,
            rns_score: rns,
            overall_score: overall,
            confidence: confidence.score,
            breakdown: FitBreakdown {
                skills,
                experience,
                soft_skills,
                referrals,
                confidence,
            },
            calculated_at: Utc::now(),
        })
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn job_is_empty(job: &Job) -> bool {
    normalize_skill_set(&job.required_skills).is_empty() && job.min_years_required == 0.0
}

fn ensure_range(field: String, value: f64, min: f64, max: f64) -> Result<(), EngineError> {
    if !value.is_finite() || value < min || value > max {
        return Err(EngineError::invalid(
            field,
            format!("{value} is outside [{min}, {max}]"),
        ));
    }
    Ok(())
}

fn ensure_non_negative(field: String, value: f64) -> Result<(), EngineError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::invalid(
            field,
            format!("{value} is negative or not finite"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_candidate(candidate: &Candidate) -> Result<(), EngineError> {
    ensure_non_negative(
        "candidate.years_of_experience".into(),
        candidate.years_of_experience,
    )?;

    for (name, value) in candidate.soft_skills.rated() {
        ensure_range(format!("candidate.soft_skills.{name}"), value, 0.0, 100.0)?;
    }

    for (index, referral) in candidate.referrals.iter().enumerate() {
        ensure_range(
            format!("candidate.referrals[{index}].trust_score"),
            referral.trust_score,
            0.0,
            1.0,
        )?;
        ensure_non_negative(
            format!("candidate.referrals[{index}].weight"),
            referral.weight,
        )?;
    }

    Ok(())
}

pub(crate) fn validate_job(job: &Job) -> Result<(), EngineError> {
    ensure_non_negative("job.min_years_required".into(), job.min_years_required)?;

    for (skill, &weight) in &job.skill_weights {
        ensure_non_negative(format!("job.skill_weights[{skill}]"), weight)?;
    }

    Ok(())
}
