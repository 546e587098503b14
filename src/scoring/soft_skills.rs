use serde::Serialize;

use crate::SoftSkillRatings;

/// Soft-skill component for the breakdown. Unrated dimensions are echoed as
/// `None` so consumers can distinguish "not rated" from "rated 0".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoftSkillResult {
    pub score: f64,
    pub communication: Option<f64>,
    pub teamwork: Option<f64>,
    pub leadership: Option<f64>,
    pub rated_dimensions: usize,
    /// No dimension was rated at all; the 0 score reflects absent data, not
    /// a bad survey.
    pub no_data: bool,
}

/// Arithmetic mean of the rated dimensions only. Dimensions simply not rated
/// stay out of the denominator instead of dragging the average down.
pub fn score_soft_skills(ratings: &SoftSkillRatings) -> SoftSkillResult {
    let rated_dimensions = ratings.rated_count();

    let score = if rated_dimensions == 0 {
        0.0
    } else {
        let sum: f64 = ratings.rated().map(|(_, value)| value).sum();
        sum / rated_dimensions as f64
    };

    SoftSkillResult {
        score,
        communication: ratings.communication,
        teamwork: ratings.teamwork,
        leadership: ratings.leadership,
        rated_dimensions,
        no_data: rated_dimensions == 0,
    }
}
