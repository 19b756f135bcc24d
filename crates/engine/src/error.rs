use thiserror::Error;

/// Failures surfaced by block grids while an edit is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The session's change budget is used up; no further writes are accepted.
    #[error("max changed blocks limit of {limit} reached")]
    MutationLimitExceeded { limit: usize },
}

pub type EditResult<T> = Result<T, EditError>;
