use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by league validation and the projection engine.
#[derive(Debug, Error)]
pub enum Error {
    #[error("league must have exactly two divisions, found {0}")]
    DivisionCount(usize),

    #[error("division {0:?} has no teams")]
    EmptyDivision(String),

    #[error("duplicate team name {0:?}")]
    DuplicateTeam(String),

    #[error("remaining game {index} references unknown team {team:?}")]
    UnknownTeam { index: usize, team: String },

    #[error("no remaining game with index {0}")]
    UnknownGame(usize),

    /// The normalization denominator would be zero; refusing to divide.
    #[error("exact enumeration accumulated no probability mass")]
    ZeroScenarioMass,

    #[error("invalid league dataset: {0}")]
    LeagueParse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid override line {line:?}: {reason}")]
    InvalidOverride { line: String, reason: String },
}
