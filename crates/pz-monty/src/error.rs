use thiserror::Error;

#[derive(Debug, Error)]
pub enum MontyError {
    #[error("simulation configuration error: {0}")]
    Config(String),
}

pub type MontyResult<T> = Result<T, MontyError>;
