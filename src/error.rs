use thiserror::Error;

/// Errors raised by the Fit Score engine. Validation runs before any scoring,
/// so a failed call never produces a partial result.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// A field is malformed or outside its declared range. Always
    /// caller-recoverable: fix the record and re-submit.
    #[error("invalid input: {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Strict mode only: the job carries neither required skills nor an
    /// experience floor, so there is nothing to score against.
    #[error("job {job_id} has no required skills and no experience floor")]
    EmptyJobDescription { job_id: String },
}

impl EngineError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display_names_the_field() {
        let err = EngineError::invalid("referrals[2].trust_score", "1.7 is outside [0, 1]");
        assert_eq!(
            err.to_string(),
            "invalid input: referrals[2].trust_score: 1.7 is outside [0, 1]"
        );
    }
}
