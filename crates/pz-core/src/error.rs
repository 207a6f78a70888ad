//! Workspace base error type.
//!
//! Sub-crates may define their own error enums and convert them into `PzError`
//! via `From` impls, or keep them separate and wrap `PzError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `pz-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PzError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `pz-*` crates.
pub type PzResult<T> = Result<T, PzError>;
