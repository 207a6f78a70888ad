use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("need at least 2 travelers, got {0}")]
    TooFewTravelers(usize),

    #[error("traveler {0:?} has a non-positive crossing time")]
    NonPositiveTime(String),

    #[error("duplicate traveler label {0:?}")]
    DuplicateLabel(String),

    #[error("plan replay failed at move {step}: {reason}")]
    Replay { step: usize, reason: String },

    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
