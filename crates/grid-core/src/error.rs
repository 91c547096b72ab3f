use crate::award::AwardTimespan;
use thiserror::Error;

/// Errors raised by the grid engine.
///
/// "No match" outcomes are never errors; these only signal broken input data
/// or a caller asking for a grid that cannot exist.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("no valid grid candidates to choose from")]
    EmptyCandidateSet,
    #[error("unknown award id `{0}`")]
    UnknownAwardId(String),
    #[error("award `{award}` is not a {expected} award")]
    MisplacedAward {
        award: String,
        expected: AwardTimespan,
    },
    #[error("invalid value for `{key}`: {value}")]
    InvalidFlag { key: String, value: String },
    #[error("unknown player `{0}`")]
    UnknownPlayer(String),
    #[error("malformed player record: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
