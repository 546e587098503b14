use std::cmp::Ordering;

use tracing::debug;

use super::engine::{validate_candidate, validate_job, FitScoreEngine, FitScoreResult};
use crate::error::EngineError;
use crate::{Candidate, Job};

#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Maximum number of results to return (truncated after sorting).
    pub max_results: usize,
    /// Minimum overall score to keep a candidate in the ranking.
    pub min_overall: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_results: 500,
            min_overall: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub fit: FitScoreResult,
}

impl FitScoreEngine {
    /// Score a candidate pool against one job and rank it.
    ///
    /// Every record is validated up front; any invalid candidate fails the
    /// whole call rather than silently dropping out of the ranking. Order is
    /// deterministic: overall score descending, then confidence descending,
    /// then candidate id ascending.
    pub fn rank_candidates(
        &self,
        job: &Job,
        candidates: &[Candidate],
        config: &RankingConfig,
    ) -> Result<Vec<RankedCandidate>, EngineError> {
        validate_job(job)?;
        for candidate in candidates {
            validate_candidate(candidate)?;
        }

        let mut ranked: Vec<RankedCandidate> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let fit = self.compute_fit_score(candidate, job)?;
            if fit.overall_score < config.min_overall {
                continue;
            }
            ranked.push(RankedCandidate {
                candidate: candidate.clone(),
                fit,
            });
        }

        ranked.sort_by(|a, b| compare_ranked(a, b));
        ranked.truncate(config.max_results);

        debug!(
            job_id = %job.id,
            pool = candidates.len(),
            ranked = ranked.len(),
            "candidate pool ranked"
        );

        Ok(ranked)
    }
}

fn compare_ranked(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.fit
        .overall_score
        .partial_cmp(&a.fit.overall_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.fit
                .confidence
                .partial_cmp(&a.fit.confidence)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.candidate.id.cmp(&b.candidate.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Referral, SoftSkillRatings};

    fn candidate(id: &str, skills: &[&str], years: f64) -> Candidate {
        Candidate {
            id: id.into(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            years_of_experience: years,
            soft_skills: SoftSkillRatings {
                communication: Some(80.0),
                teamwork: Some(80.0),
                leadership: None,
            },
            referrals: vec![Referral {
                trust_score: 0.8,
                weight: 1.0,
            }],
        }
    }

    fn job() -> Job {
        Job {
            id: "job-1".into(),
            required_skills: vec!["React".into(), "TypeScript".into()],
            min_years_required: 3.0,
            skill_weights: Default::default(),
        }
    }

    #[test]
    fn orders_by_overall_score_descending() {
        let engine = FitScoreEngine::default();
        let pool = vec![
            candidate("weak", &["React"], 1.0),
            candidate("strong", &["React", "TypeScript"], 5.0),
        ];

        let ranked = engine
            .rank_candidates(&job(), &pool, &RankingConfig::default())
            .unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].candidate.id, "strong");
        assert!(ranked[0].fit.overall_score > ranked[1].fit.overall_score);
    }

    #[test]
    fn equal_scores_break_ties_on_candidate_id() {
        let engine = FitScoreEngine::default();
        let pool = vec![
            candidate("beta", &["React", "TypeScript"], 5.0),
            candidate("alpha", &["React", "TypeScript"], 5.0),
        ];

        let ranked = engine
            .rank_candidates(&job(), &pool, &RankingConfig::default())
            .unwrap();

        assert_eq!(ranked[0].candidate.id, "alpha");
        assert_eq!(ranked[1].candidate.id, "beta");
    }

    #[test]
    fn min_overall_filters_and_max_results_truncates() {
        let engine = FitScoreEngine::default();
        let pool = vec![
            candidate("a", &["React", "TypeScript"], 5.0),
            candidate("b", &["React", "TypeScript"], 4.0),
            candidate("c", &[], 0.0),
        ];

        let config = RankingConfig {
            max_results: 1,
            min_overall: 40.0,
        };
        let ranked = engine.rank_candidates(&job(), &pool, &config).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].candidate.id, "a");
    }

    #[test]
    fn one_invalid_candidate_fails_the_whole_batch() {
        let engine = FitScoreEngine::default();
        let mut bad = candidate("bad", &["React"], 2.0);
        bad.referrals[0].trust_score = 2.0;
        let pool = vec![candidate("ok", &["React"], 2.0), bad];

        let err = engine
            .rank_candidates(&job(), &pool, &RankingConfig::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }
}
