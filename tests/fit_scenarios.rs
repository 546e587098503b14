use skylevel_core::{Candidate, FitScoreEngine, Job, Referral, SoftSkillRatings};

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn candidate(skills: &[&str], years: f64) -> Candidate {
    Candidate {
        id: "cand".into(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        years_of_experience: years,
        soft_skills: SoftSkillRatings::default(),
        referrals: vec![],
    }
}

fn job(skills: &[&str], min_years: f64) -> Job {
    Job {
        id: "job".into(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        min_years_required: min_years,
        skill_weights: Default::default(),
    }
}

#[test]
fn scenario_a_three_of_four_equal_weight_skills() {
    let engine = FitScoreEngine::default();
    let cand = candidate(&["React", "TypeScript", "Node.js"], 0.0);
    let j = job(&["React", "TypeScript", "Node.js", "GraphQL"], 0.0);

    let result = engine.compute_fit_score(&cand, &j).unwrap();
    assert!((result.tms_score - 75.0).abs() < 1e-9);
    assert_eq!(result.breakdown.skills.matched.len(), 3);
    assert_eq!(result.breakdown.skills.missing, vec!["graphql"]);
}

#[test]
fn scenario_b_surplus_experience() {
    let engine = FitScoreEngine::default();
    let result = engine
        .compute_fit_score(&candidate(&[], 7.0), &job(&[], 5.0))
        .unwrap();
    assert!((result.rns_score - 88.0).abs() < 1e-9);
}

#[test]
fn scenario_c_experience_shortfall() {
    let engine = FitScoreEngine::default();
    let result = engine
        .compute_fit_score(&candidate(&[], 3.0), &job(&[], 5.0))
        .unwrap();
    assert!((result.rns_score - 60.0).abs() < 1e-9);
}

#[test]
fn scenario_d_srs_blend() {
    let engine = FitScoreEngine::default();
    let mut cand = candidate(&[], 0.0);
    cand.soft_skills = SoftSkillRatings {
        communication: Some(80.0),
        teamwork: Some(75.0),
        leadership: Some(70.0),
    };
    cand.referrals = vec![
        Referral {
            trust_score: 0.9,
            weight: 1.0,
        },
        Referral {
            trust_score: 0.8,
            weight: 1.0,
        },
    ];

    let result = engine.compute_fit_score(&cand, &job(&[], 0.0)).unwrap();
    assert!((result.breakdown.soft_skills.score - 75.0).abs() < 1e-9);
    assert!((result.breakdown.referrals.score - 85.0).abs() < 1e-9);
    assert!((result.srs_score - 79.0).abs() < 1e-9);
}

#[test]
fn scenario_e_sparse_data_lowers_confidence() {
    let engine = FitScoreEngine::default();
    let mut cand = candidate(&["React"], 5.0);
    cand.soft_skills.communication = Some(70.0);

    let result = engine
        .compute_fit_score(&cand, &job(&["React"], 5.0))
        .unwrap();

    // TMS 100, RNS 80: 100 − 15 (one soft dimension) − 10 (no referrals)
    // − 0.4 × 20 (disagreement) = 67
    assert!((result.confidence - 67.0).abs() < 1e-9);
    assert!(result.breakdown.confidence.sparse_soft_skills);
    assert!(result.breakdown.confidence.no_referrals);
}

#[test]
fn degenerate_job_scores_full_tms_and_rns() {
    let engine = FitScoreEngine::default();
    let open_job = job(&[], 0.0);

    // Regardless of the candidate: zero tenure and surplus tenure alike.
    for years in [0.0, 3.0, 12.0] {
        let result = engine
            .compute_fit_score(&candidate(&[], years), &open_job)
            .unwrap();
        assert_eq!(result.tms_score, 100.0);
        assert_eq!(result.rns_score, 100.0);
    }
}

#[test]
fn overall_equals_the_weighted_sum_for_varied_inputs() {
    let engine = FitScoreEngine::default();

    let candidates = vec![
        candidate(&[], 0.0),
        candidate(&["React"], 2.0),
        {
            let mut c = candidate(&["React", "TypeScript", "GraphQL"], 10.0);
            c.soft_skills = SoftSkillRatings {
                communication: Some(95.0),
                teamwork: Some(40.0),
                leadership: None,
            };
            c.referrals = vec![Referral {
                trust_score: 0.3,
                weight: 2.0,
            }];
            c
        },
    ];
    let jobs = vec![
        job(&[], 0.0),
        job(&["React", "GraphQL"], 5.0),
        job(&["Rust", "Kubernetes", "AWS"], 8.0),
    ];

    for cand in &candidates {
        for j in &jobs {
            let result = engine.compute_fit_score(cand, j).unwrap();
            let expected = round_one_decimal(
                0.5 * result.tms_score + 0.3 * result.srs_score + 0.2 * result.rns_score,
            );
            assert!(
                (result.overall_score - expected).abs() < 1e-9,
                "weight identity broken for {} vs {}",
                cand.id,
                j.id
            );

            for value in [
                result.tms_score,
                result.srs_score,
                result.rns_score,
                result.overall_score,
                result.confidence,
            ] {
                assert!((0.0..=100.0).contains(&value), "{value} out of bounds");
            }
        }
    }
}

#[test]
fn scoring_is_deterministic_across_invocations() {
    let engine = FitScoreEngine::default();
    let mut cand = candidate(&["React", "Node.js"], 6.0);
    cand.soft_skills.teamwork = Some(66.0);
    cand.referrals = vec![Referral {
        trust_score: 0.7,
        weight: 1.0,
    }];
    let j = job(&["React", "TypeScript"], 4.0);

    let first = engine.compute_fit_score(&cand, &j).unwrap();
    let second = engine.compute_fit_score(&cand, &j).unwrap();

    assert_eq!(first.tms_score, second.tms_score);
    assert_eq!(first.srs_score, second.srs_score);
    assert_eq!(first.rns_score, second.rns_score);
    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.breakdown, second.breakdown);
}

#[test]
fn adding_a_matched_skill_never_decreases_tms() {
    let engine = FitScoreEngine::default();
    let j = job(&["React", "TypeScript", "GraphQL", "AWS"], 0.0);

    let mut skills: Vec<&str> = vec![];
    let mut previous = -1.0;
    for next in ["React", "TypeScript", "GraphQL", "AWS"] {
        skills.push(next);
        let tms = engine
            .compute_fit_score(&candidate(&skills, 0.0), &j)
            .unwrap()
            .tms_score;
        assert!(tms >= previous);
        previous = tms;
    }
}
