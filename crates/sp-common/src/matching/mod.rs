pub mod filters;
pub mod ranking;
pub mod scoring;
pub mod similarity;
pub mod weights;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchingError {
    #[error("weights must sum to 1.0 (got {sum})")]
    InvalidWeights { sum: f64 },
    #[error("weight for {attribute} must be a finite, non-negative number")]
    NegativeWeight { attribute: &'static str },
}
