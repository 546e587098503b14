use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::skill_normalizer::{normalize_skill, normalize_skill_set};
use crate::Job;

/// Weighted required-skill coverage. Skill names in `matched` / `missing` are
/// canonical (normalized) and sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillMatchResult {
    /// 0–100, pure weighted coverage ratio. Ties are not broken.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub matched_weight: f64,
    pub total_weight: f64,
    /// The job listed no required skills, so there is nothing to be unmet.
    pub no_requirements: bool,
}

/// Coverage of a job's required skills by a candidate's skill set.
///
/// Both sides are normalized before matching, so "React.js" on the job post
/// matches "react" on the profile. Per-skill weights default to 1.0; when two
/// raw weight keys collapse to the same canonical skill, the larger wins.
pub fn score_skill_match(job: &Job, candidate_skills: &[String]) -> SkillMatchResult {
    let required = normalize_skill_set(&job.required_skills);

    if required.is_empty() {
        return SkillMatchResult {
            score: 100.0,
            matched: vec![],
            missing: vec![],
            matched_weight: 0.0,
            total_weight: 0.0,
            no_requirements: true,
        };
    }

    let weights = canonical_weights(&job.skill_weights);
    let candidate = normalize_skill_set(candidate_skills);

    let matched_set: HashSet<_> = required.intersection(&candidate).cloned().collect();

    let weight_of = |skill: &str| weights.get(skill).copied().unwrap_or(1.0);
    let total_weight: f64 = required.iter().map(|s| weight_of(s)).sum();
    let matched_weight: f64 = matched_set.iter().map(|s| weight_of(s)).sum();

    let score = if total_weight > 0.0 {
        (100.0 * matched_weight / total_weight).clamp(0.0, 100.0)
    } else {
        // Every required skill was explicitly weighted at zero.
        100.0
    };

    let mut matched: Vec<_> = matched_set.into_iter().collect();
    matched.sort();
    let mut missing: Vec<_> = required.difference(&candidate).cloned().collect();
    missing.sort();

    SkillMatchResult {
        score,
        matched,
        missing,
        matched_weight,
        total_weight,
        no_requirements: false,
    }
}

fn canonical_weights(raw: &HashMap<String, f64>) -> HashMap<String, f64> {
    let mut weights: HashMap<String, f64> = HashMap::new();
    for (skill, &weight) in raw {
        let canonical = normalize_skill(skill);
        weights
            .entry(canonical)
            .and_modify(|w| *w = w.max(weight))
            .or_insert(weight);
    }
    weights
}
